//! Page glue around a mounted slider
//!
//! Small host-generic pieces the browser handle composes: breakpoint
//! decisions, arrow-key navigation and the panel tint.

use pageslide::{Host, Result, SliderData};

/// What to do with the slider after the viewport changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Responsive {
    /// Build a slider
    Mount,
    /// Clear the running slider
    Clear,
    /// Leave things as they are
    Keep,
}

impl Responsive {
    pub fn decide(mounted: bool, wanted: bool) -> Self {
        match (mounted, wanted) {
            (false, true) => Responsive::Mount,
            (true, false) => Responsive::Clear,
            _ => Responsive::Keep,
        }
    }
}

/// Slider command bound to a key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyNavigation {
    Previous,
    Next,
}

impl KeyNavigation {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(KeyNavigation::Previous),
            "ArrowRight" => Some(KeyNavigation::Next),
            _ => None,
        }
    }
}

/// Copies the current slide's color attribute into a custom property on a
/// panel element
#[derive(Clone, Debug)]
pub struct PanelTint<E> {
    panel: E,
    property: String,
    attribute: String,
    applied: Option<String>,
}

impl<E: Clone + PartialEq> PanelTint<E> {
    pub fn new(panel: E, property: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            panel,
            property: property.into(),
            attribute: attribute.into(),
            applied: None,
        }
    }

    pub fn panel(&self) -> &E {
        &self.panel
    }

    /// Color currently written to the panel
    pub fn applied(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    /// Follow `data`; slides without the attribute leave the tint unchanged
    pub fn sync<H>(&mut self, host: &mut H, data: &SliderData<E>) -> Result<()>
    where
        H: Host<Element = E>,
    {
        let color = data
            .current_slide
            .as_ref()
            .and_then(|slide| host.attribute(slide, &self.attribute));
        let Some(color) = color else {
            return Ok(());
        };
        if self.applied.as_deref() == Some(color.as_str()) {
            return Ok(());
        }
        tracing::trace!("panel tint {} = {}", self.property, color);
        host.set_style(&self.panel, &self.property, Some(&color))?;
        self.applied = Some(color);
        Ok(())
    }

    /// Remove the property from the panel
    pub fn reset<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: Host<Element = E>,
    {
        if self.applied.take().is_some() {
            host.set_style(&self.panel, &self.property, None)?;
        }
        Ok(())
    }
}
