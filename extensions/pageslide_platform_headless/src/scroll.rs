//! Simulated document scrolling
//!
//! Smooth scrolls move linearly from start to target over
//! [`SMOOTH_SCROLL_DURATION`].

use std::time::Duration;

use pageslide_core::{clamp, lerp};
use pageslide_platform::ScrollBehavior;

/// How long a smooth scroll takes to reach its target
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);

/// A `scroll_to` request as the page received it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Requested top offset, before clamping to the scrollable range
    pub top: f64,
    /// Requested behavior
    pub behavior: ScrollBehavior,
    /// Document time of the request
    pub at: Duration,
}

/// An in-flight smooth scroll
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SmoothScroll {
    from: f64,
    to: f64,
    start: Duration,
}

impl SmoothScroll {
    pub(crate) fn new(from: f64, to: f64, start: Duration) -> Self {
        Self { from, to, start }
    }

    pub(crate) fn target(&self) -> f64 {
        self.to
    }

    /// Position at `now`, and whether the scroll has finished
    pub(crate) fn sample(&self, now: Duration) -> (f64, bool) {
        let elapsed = now.saturating_sub(self.start);
        if elapsed >= SMOOTH_SCROLL_DURATION {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64();
        (lerp(self.from, self.to, clamp(t, 0.0, 1.0)), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reaches_target_exactly() {
        let scroll = SmoothScroll::new(0.0, 1600.0, Duration::from_millis(100));

        assert_eq!(scroll.sample(Duration::from_millis(100)), (0.0, false));
        let (mid, done) = scroll.sample(Duration::from_millis(250));
        assert!(!done);
        assert!((mid - 800.0).abs() < 1e-9);
        assert_eq!(scroll.sample(Duration::from_millis(400)), (1600.0, true));
        assert_eq!(scroll.sample(Duration::from_secs(5)), (1600.0, true));
    }

    #[test]
    fn test_sample_is_monotonic() {
        let scroll = SmoothScroll::new(2000.0, 500.0, Duration::ZERO);
        let mut last = 2000.0;
        for ms in (0..=300).step_by(5) {
            let (y, _) = scroll.sample(Duration::from_millis(ms));
            assert!(y <= last);
            last = y;
        }
        assert_eq!(last, 500.0);
    }
}
