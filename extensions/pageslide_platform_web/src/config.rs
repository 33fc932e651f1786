//! Mount configuration
//!
//! The options object passed to `mount()` from JavaScript: every slider
//! option at the top level, plus the page glue around it.
//!
//! ```json
//! {
//!   "multiplier": 1.5,
//!   "autoCenterDelay": 600,
//!   "minWidth": 1024,
//!   "keyboard": true,
//!   "panelSelector": ".js-works-panel"
//! }
//! ```

use pageslide::{PageSliderOptions, Result, SliderError};
use serde::{Deserialize, Serialize};

/// CSS custom property the panel tint writes by default
pub const DEFAULT_PANEL_PROPERTY: &str = "--panel-color";

/// Slide attribute the panel tint reads by default
pub const DEFAULT_COLOR_ATTRIBUTE: &str = "data-color";

/// Options accepted by `mount()`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountConfig {
    /// Slider options, flattened into the same object
    #[serde(flatten)]
    pub slider: PageSliderOptions,
    /// Only run the slider while the viewport is at least this wide (px)
    pub min_width: Option<f64>,
    /// Arrow keys navigate between slides
    pub keyboard: bool,
    /// Element that receives the current slide's color
    pub panel_selector: Option<String>,
    /// Custom property set on the panel
    pub panel_property: String,
    /// Slide attribute holding the color
    pub color_attribute: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            slider: PageSliderOptions::standard(),
            min_width: None,
            keyboard: false,
            panel_selector: None,
            panel_property: DEFAULT_PANEL_PROPERTY.to_string(),
            color_attribute: DEFAULT_COLOR_ATTRIBUTE.to_string(),
        }
    }
}

impl MountConfig {
    /// Parse from a JSON object; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn with_min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn with_keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    pub fn with_panel(mut self, selector: impl Into<String>) -> Self {
        self.panel_selector = Some(selector.into());
        self
    }

    /// Check the slider options and the glue options
    pub fn validate(&self) -> Result<()> {
        self.slider.validate()?;

        if let Some(width) = self.min_width {
            if !width.is_finite() || width < 0.0 {
                return Err(SliderError::InvalidOption {
                    name: "minWidth",
                    reason: format!("must be a non-negative number, got {}", width),
                });
            }
        }
        if !self.panel_property.starts_with("--") {
            return Err(SliderError::InvalidOption {
                name: "panelProperty",
                reason: format!("{:?} is not a custom property", self.panel_property),
            });
        }
        if self.color_attribute.trim().is_empty() {
            return Err(SliderError::InvalidOption {
                name: "colorAttribute",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Whether a slider belongs on a page `width` pixels wide
    pub fn wants_slider(&self, width: f64) -> bool {
        self.min_width.map_or(true, |min| width >= min)
    }
}
