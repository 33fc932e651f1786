//! Pageslide Scenario Test Suite
//!
//! End-to-end scenarios that mount a slider on a
//! [`HeadlessDocument`](pageslide_platform_headless::HeadlessDocument) and
//! drive it the way a browser would: user scrolls, smooth scroll animation,
//! resizes and timer callbacks, all on a virtual clock.
//!
//! # Test Categories
//!
//! - **Geometry**: scroll-to-indent mapping and page sizing
//! - **Navigation**: `go_to_slide`, `next`, `previous`
//! - **Auto-center**: snapping after scrolling stops
//! - **Rate limiting**: throttle and debounce gates
//! - **Notifications**: `Updated` / `SlideChanged` delivery
//! - **Lifecycle**: construction and `clear()`

pub mod harness;
pub mod runner;
pub mod tests;

pub use harness::{EventLog, SliderHarness, TestHarness, TestHarnessConfig, TestResult};
pub use runner::TestRunner;
