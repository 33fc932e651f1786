//! Pageslide Host Abstraction
//!
//! This crate provides the environment-facing trait and types a page slider
//! is written against. The slider never talks to a browser directly; every
//! read of the viewport or scroll position and every write to the element
//! tree goes through [`Host`].
//!
//! # Host Implementations
//!
//! - `pageslide_platform_headless` - In-memory document with a virtual clock
//! - `pageslide_platform_web` - Browser DOM via `web-sys` (wasm32 only)
//!
//! # Example
//!
//! ```ignore
//! use pageslide::{PageSlider, PageSliderOptions};
//! use pageslide_platform::prelude::*;
//!
//! fn mount<H: Host>(host: &mut H, container: H::Element) -> pageslide::Result<PageSlider<H>> {
//!     let slider = PageSlider::new(host, container, PageSliderOptions::default())?;
//!     assert!(slider.data().nb_slides > 0);
//!     Ok(slider)
//! }
//! ```

mod error;
mod event;
mod host;
mod viewport;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{HostEvent, ScrollBehavior};
pub use host::Host;
pub use viewport::Viewport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{HostEvent, ScrollBehavior};
    pub use crate::host::Host;
    pub use crate::viewport::Viewport;
}
