//! Viewport size

/// Size of the visible area in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Inner width
    pub width: f64,
    /// Inner height
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero (or not a usable number)
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_empty() {
        assert!(Viewport::default().is_empty());
        assert!(Viewport::new(1000.0, 0.0).is_empty());
        assert!(Viewport::new(f64::NAN, 800.0).is_empty());
        assert!(!Viewport::new(1000.0, 800.0).is_empty());
    }
}
