//! Rate limiting gates
//!
//! Throttle and debounce as small deadline-driven state machines. A gate
//! never owns a timer or a callback: callers report each incoming call with
//! the current time and ask the gate whether the guarded work should run.
//! The caller's host is expected to wake up at [`Throttle::deadline`] /
//! [`Debounce::deadline`] and [`poll`](Debounce::poll) the gate.
//!
//! All times are offsets from an arbitrary host origin.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pageslide_core::timing::Throttle;
//!
//! let ms = Duration::from_millis;
//! let mut gate = Throttle::new(ms(200));
//!
//! assert!(gate.call(ms(0)));    // leading edge runs immediately
//! assert!(!gate.call(ms(50)));  // absorbed
//! assert!(!gate.call(ms(120))); // absorbed
//! assert_eq!(gate.deadline(), Some(ms(200)));
//! assert!(gate.poll(ms(200)));  // one trailing run
//! assert!(!gate.poll(ms(400)));
//! ```

use std::time::Duration;

// ============================================================================
// Throttle
// ============================================================================

/// Leading + trailing edge throttle
///
/// The first call in a quiet period passes and opens a window of `delay`.
/// Calls inside the window are absorbed; once the window has expired,
/// [`poll`](Self::poll) reports a single trailing run if anything was
/// absorbed. Any number of calls within one window therefore yields at most
/// two runs.
#[derive(Clone, Debug)]
pub struct Throttle {
    delay: Duration,
    /// End of the currently open window
    window_end: Option<Duration>,
    /// A call was absorbed during the open window
    pending: bool,
}

impl Throttle {
    /// Create a throttle with the given window
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            window_end: None,
            pending: false,
        }
    }

    /// Create a throttle with a window in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Window length
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Report a call at `now`
    ///
    /// Returns `true` when the guarded work should run right away.
    pub fn call(&mut self, now: Duration) -> bool {
        if self.is_open(now) {
            self.pending = true;
            return false;
        }
        // An expired window that was never polled is simply replaced: running
        // now subsumes its trailing edge.
        self.window_end = Some(now + self.delay);
        self.pending = false;
        true
    }

    /// Close the window if it has expired
    ///
    /// Returns `true` when a trailing run is due.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.window_end {
            Some(end) if now >= end => {
                self.window_end = None;
                std::mem::take(&mut self.pending)
            }
            _ => false,
        }
    }

    /// When the pending trailing run becomes due
    ///
    /// `None` when nothing was absorbed; an idle window needs no wake-up.
    pub fn deadline(&self) -> Option<Duration> {
        if self.pending {
            self.window_end
        } else {
            None
        }
    }

    /// Whether a window is open at `now`
    pub fn is_open(&self, now: Duration) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }

    /// Drop the open window and any pending trailing run
    pub fn cancel(&mut self) {
        self.window_end = None;
        self.pending = false;
    }
}

// ============================================================================
// Debounce
// ============================================================================

/// Trailing edge debounce
///
/// Every call re-arms the deadline `delay` after it. [`poll`](Self::poll)
/// reports exactly one run once the deadline passes without a newer call.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    /// Create a debounce with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Create a debounce with a quiet period in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Report a call at `now`, cancelling and restarting the countdown
    pub fn call(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// When the pending run becomes due
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Whether a run is armed
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm without running
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Earliest of a set of optional deadlines
pub fn earliest<I>(deadlines: I) -> Option<Duration>
where
    I: IntoIterator<Item = Option<Duration>>,
{
    deadlines.into_iter().flatten().min()
}
