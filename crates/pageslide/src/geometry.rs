//! Scroll ↔ slide mapping
//!
//! The page is made `slide_count * multiplier` viewport heights tall, so the
//! vertical scroll range is `viewport_height * (slide_count * multiplier - 1)`.
//! That range maps linearly onto the horizontal travel of the slide row,
//! `slide_count * viewport_width - viewport_width`.
//!
//! Degenerate layouts (one slide, an empty viewport) have a zero-length range
//! on one side of the mapping; those map to `0.0` rather than NaN.

use pageslide_platform::Viewport;

/// Geometry of a slider for one viewport size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideGeometry {
    /// Number of slides
    pub slide_count: usize,
    /// Scroll distance per slide in viewport heights
    pub multiplier: f64,
    /// Viewport the layout was computed for
    pub viewport: Viewport,
}

impl SlideGeometry {
    /// Create geometry for `slide_count` slides
    pub fn new(slide_count: usize, multiplier: f64, viewport: Viewport) -> Self {
        Self {
            slide_count,
            multiplier,
            viewport,
        }
    }

    fn count(&self) -> f64 {
        self.slide_count as f64
    }

    /// Document height that makes the scroll range (px)
    pub fn document_height(&self) -> f64 {
        self.count() * self.multiplier * self.viewport.height
    }

    /// Width of the slide row (px)
    pub fn row_width(&self) -> f64 {
        self.count() * self.viewport.width
    }

    /// Horizontal travel from the first to the last slide (px)
    pub fn total_length(&self) -> f64 {
        self.row_width() - self.viewport.width
    }

    /// Vertical scroll range (px)
    pub fn scroll_range(&self) -> f64 {
        self.viewport.height * (self.count() * self.multiplier - 1.0)
    }

    /// Scroll position that brings slide `index` into view
    ///
    /// The index is not clamped: out-of-range indexes give out-of-range
    /// positions.
    pub fn scroll_for_slide(&self, index: isize) -> f64 {
        let total_length = self.total_length();
        if total_length <= 0.0 {
            return 0.0;
        }
        let width_ratio = index as f64 * self.viewport.width / total_length;
        self.scroll_range() * width_ratio
    }

    /// Horizontal indent of the slide row for a scroll position
    pub fn left_indent_for_scroll(&self, scroll_y: f64) -> f64 {
        let scroll_range = self.scroll_range();
        if scroll_range <= 0.0 {
            tracing::debug!(
                "degenerate scroll range ({} slides, x{} multiplier); indent pinned to 0",
                self.slide_count,
                self.multiplier
            );
            return 0.0;
        }
        self.total_length() * (scroll_y / scroll_range)
    }

    /// Index of the slide nearest to `left_indent`
    pub fn nearest_index(&self, left_indent: f64) -> isize {
        if self.viewport.width <= 0.0 {
            return 0;
        }
        (left_indent / self.viewport.width).round() as isize
    }

    /// Distance from `left_indent` to slide `index`, in half viewport widths
    ///
    /// `0.0` when the slide is exactly in place, `1.0` halfway to a neighbour.
    pub fn distance_to_slide(&self, left_indent: f64, index: isize) -> f64 {
        let half_width = self.viewport.width / 2.0;
        if half_width <= 0.0 {
            return 0.0;
        }
        (left_indent - index as f64 * self.viewport.width).abs() / half_width
    }
}
