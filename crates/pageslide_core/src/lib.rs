//! Pageslide Core
//!
//! Foundational pieces shared by the page slider and its hosts:
//!
//! - **Rate limiting**: [`Throttle`] and [`Debounce`] gates driven by host time
//! - **Notification hub**: per-instance publish/subscribe with typed payloads
//! - **Numeric helpers**: bounds-tolerant clamping and linear interpolation
//!
//! Nothing in this crate owns a timer or touches an environment; callers feed
//! it timestamps and decide what to run.

pub mod events;
pub mod math;
pub mod timing;

pub use events::{EventHub, FireReport, ListenerCallback, ListenerId, Notification};
pub use math::{clamp, clamp_distance, lerp};
pub use timing::{earliest, Debounce, Throttle};
