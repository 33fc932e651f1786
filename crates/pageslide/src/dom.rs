//! Element tree helpers
//!
//! Host-generic wrap/unwrap plus [`StyleOverrides`], the record of every
//! inline style a slider writes outside its own wrapper.

use pageslide_platform::{Host, PlatformError};

use crate::error::{Result, SliderError};

/// Insert `wrapper` in place of `element` and move `element` inside it
///
/// Fails with [`SliderError::DetachedContainer`] when `element` has no parent.
pub fn wrap_element<H: Host>(
    host: &mut H,
    element: &H::Element,
    wrapper: &H::Element,
) -> Result<()> {
    let parent = host
        .parent(element)
        .ok_or(SliderError::DetachedContainer)?;
    host.insert_before(&parent, wrapper, Some(element))?;
    host.insert_before(wrapper, element, None)?;
    Ok(())
}

/// Move every child of `wrapper` in front of it, then remove `wrapper`
pub fn unwrap_element<H: Host>(host: &mut H, wrapper: &H::Element) -> Result<()> {
    let parent = host.parent(wrapper).ok_or_else(|| {
        PlatformError::TreeMutation("cannot unwrap an element that has no parent".into())
    })?;
    for child in host.children(wrapper) {
        host.insert_before(&parent, &child, Some(wrapper))?;
    }
    host.remove_child(&parent, wrapper)?;
    Ok(())
}

// ============================================================================
// Style overrides
// ============================================================================

#[derive(Clone, Debug)]
struct Override<E> {
    element: E,
    property: &'static str,
    original: Option<String>,
}

/// Inline styles written by a slider, with the values they replaced
///
/// The first write to an `(element, property)` pair captures the value that
/// was there before; later writes only update the live value.
/// [`restore`](Self::restore) puts every captured value back verbatim.
#[derive(Clone, Debug)]
pub struct StyleOverrides<E> {
    entries: Vec<Override<E>>,
}

impl<E> Default for StyleOverrides<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Clone + PartialEq> StyleOverrides<E> {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` on `element`, remembering the pre-existing value
    pub fn apply<H>(
        &mut self,
        host: &mut H,
        element: &E,
        property: &'static str,
        value: &str,
    ) -> Result<()>
    where
        H: Host<Element = E>,
    {
        if self.original(element, property).is_none() {
            let original = host.style(element, property);
            self.entries.push(Override {
                element: element.clone(),
                property,
                original,
            });
        }
        host.set_style(element, property, Some(value))?;
        Ok(())
    }

    /// Captured pre-existing value
    ///
    /// `None` when the pair was never overridden, `Some(None)` when the
    /// property was unset before.
    pub fn original(&self, element: &E, property: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|entry| entry.element == *element && entry.property == property)
            .map(|entry| entry.original.as_deref())
    }

    /// Write every captured value back and forget them
    pub fn restore<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: Host<Element = E>,
    {
        while let Some(entry) = self.entries.pop() {
            host.set_style(&entry.element, entry.property, entry.original.as_deref())?;
        }
        Ok(())
    }

    /// Number of overridden `(element, property)` pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is overridden
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
