//! Pageslide Headless Host
//!
//! An in-memory page for driving sliders without a browser: an element
//! tree, a viewport, a scroll position that can move smoothly over time and
//! a clock that only advances when told to.
//!
//! This crate implements [`pageslide_platform::Host`] and is what the slider
//! tests and the scenario suite run against.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use pageslide_platform::prelude::*;
//! use pageslide_platform_headless::HeadlessDocument;
//!
//! let mut doc = HeadlessDocument::new(Viewport::new(1000.0, 800.0));
//! let body = doc.body_node();
//! doc.set_style(&body, "height", Some("4000px"))?;
//! doc.listen(HostEvent::Scroll);
//!
//! doc.scroll_to(1600.0, ScrollBehavior::Smooth);
//! doc.advance(Duration::from_millis(300));
//!
//! assert_eq!(doc.scroll_y(), 1600.0);
//! assert!(doc.take_pending(HostEvent::Scroll));
//! # Ok::<(), PlatformError>(())
//! ```

pub mod document;
pub mod scroll;
pub mod tree;

pub use document::HeadlessDocument;
pub use scroll::{ScrollCommand, SMOOTH_SCROLL_DURATION};
pub use tree::{Node, NodeId, NodeTree};
