//! Slider options and presets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SliderError};

/// Configuration for a page slider.
///
/// Keys are camelCase when (de)serialized. Every key is optional: missing
/// keys fall back to the [`standard`](Self::standard) value independently of
/// each other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSliderOptions {
    /// Scroll distance per slide, in viewport heights.
    pub multiplier: f64,
    /// Minimum interval between scroll recomputations (ms).
    #[serde(rename = "scrollThrottle")]
    pub scroll_throttle_ms: u64,
    /// Snap to the nearest slide once scrolling stops.
    pub auto_center: bool,
    /// Idle time before snapping (ms).
    #[serde(rename = "autoCenterDelay")]
    pub auto_center_delay_ms: u64,
    /// Snap only when closer than this to a slide (0 = on the slide, 1 = halfway).
    pub auto_center_threshold: f64,
    /// Quiet period before redrawing after a resize (ms).
    #[serde(rename = "resizeDebounce")]
    pub resize_debounce_ms: u64,
    /// Class marking slide elements inside the container.
    pub slide_class: String,
    /// Class added to revealed slides.
    pub active_class: String,
    /// Class of the generated wrapper element.
    pub wrapper_class: String,
}

impl Default for PageSliderOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl PageSliderOptions {
    /// Standard configuration.
    pub fn standard() -> Self {
        Self {
            multiplier: 1.0,
            scroll_throttle_ms: 10,
            auto_center: true,
            auto_center_delay_ms: 1000,
            auto_center_threshold: 0.45,
            resize_debounce_ms: 200,
            slide_class: "slide".to_string(),
            active_class: "active".to_string(),
            wrapper_class: "js-page-slider-wrapper".to_string(),
        }
    }

    /// Free scrolling without snapping.
    pub fn static_snap() -> Self {
        Self {
            auto_center: false,
            ..Self::standard()
        }
    }

    /// Parse options from JSON, merging over the standard values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            return Err(SliderError::InvalidOption {
                name: "multiplier",
                reason: format!("expected a positive number, got {}", self.multiplier),
            });
        }
        if !(0.0..=1.0).contains(&self.auto_center_threshold) {
            return Err(SliderError::InvalidOption {
                name: "autoCenterThreshold",
                reason: format!(
                    "expected a value between 0 and 1, got {}",
                    self.auto_center_threshold
                ),
            });
        }
        for (name, class) in [
            ("slideClass", &self.slide_class),
            ("activeClass", &self.active_class),
            ("wrapperClass", &self.wrapper_class),
        ] {
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(SliderError::InvalidOption {
                    name,
                    reason: format!("expected a single class name, got {:?}", class),
                });
            }
        }
        Ok(())
    }

    /// Scroll throttle window.
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    /// Auto-center idle delay.
    pub fn auto_center_delay(&self) -> Duration {
        Duration::from_millis(self.auto_center_delay_ms)
    }

    /// Resize debounce window.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Set the scroll multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the scroll throttle window (ms).
    pub fn with_scroll_throttle(mut self, ms: u64) -> Self {
        self.scroll_throttle_ms = ms;
        self
    }

    /// Enable or disable auto-centering.
    pub fn with_auto_center(mut self, enabled: bool) -> Self {
        self.auto_center = enabled;
        self
    }

    /// Set the auto-center idle delay (ms).
    pub fn with_auto_center_delay(mut self, ms: u64) -> Self {
        self.auto_center_delay_ms = ms;
        self
    }

    /// Set the resize debounce window (ms).
    pub fn with_resize_debounce(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    /// Set the slide marker class.
    pub fn with_slide_class(mut self, class: impl Into<String>) -> Self {
        self.slide_class = class.into();
        self
    }
}
