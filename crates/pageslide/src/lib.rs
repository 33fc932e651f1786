//! Pageslide
//!
//! A scroll-driven horizontal page slider. The page is made tall enough that
//! scrolling down through it moves a row of full-viewport slides from right
//! to left; the slider tracks which slide is nearest, marks slides as they
//! are reached and can snap to the nearest slide when scrolling stops.
//!
//! The slider is headless: it is written against
//! [`pageslide_platform::Host`] and never touches a browser API itself.
//!
//! # Example
//!
//! ```rust
//! use pageslide::{PageSlider, PageSliderOptions, SliderEventKind};
//! use pageslide::{HostEvent, Viewport};
//! use pageslide_platform_headless::HeadlessDocument;
//!
//! let mut doc = HeadlessDocument::new(Viewport::new(1000.0, 800.0));
//! let container = doc.build_slider_markup(5);
//!
//! let mut slider = PageSlider::new(&mut doc, container, PageSliderOptions::standard())?;
//! slider.subscribe(SliderEventKind::SlideChanged, |event| {
//!     println!("slide changed: {:?}", event);
//! });
//!
//! // The user scrolls; the host forwards the notification.
//! doc.user_scroll_to(1000.0);
//! if doc.take_pending(HostEvent::Scroll) {
//!     slider.on_scroll(&mut doc)?;
//! }
//! assert_eq!(slider.data().current_index, 1);
//!
//! // Commands scroll the page; the slider follows through its notifications.
//! slider.go_to_slide(&mut doc, 2);
//! assert_eq!(doc.scroll_log().last().map(|c| c.top), Some(1600.0));
//!
//! slider.clear(&mut doc)?;
//! # Ok::<(), pageslide::SliderError>(())
//! ```
//!
//! # Features
//!
//! - **Scroll mapping**: vertical range `viewport_height * (slides * multiplier - 1)`
//!   maps linearly onto horizontal travel `slides * viewport_width - viewport_width`
//! - **Rate limiting**: throttled scroll handling, debounced resize redraw
//! - **Auto-center**: debounced snap to the nearest slide once scrolling stops
//! - **Notifications**: typed `Updated` / `SlideChanged` payloads
//! - **Symmetric teardown**: `clear()` restores the page's tree and inline styles

pub mod config;
pub mod data;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod slider;

pub use config::PageSliderOptions;
pub use data::{SliderData, SliderEvent, SliderEventKind};
pub use dom::StyleOverrides;
pub use error::{Result, SliderError};
pub use geometry::SlideGeometry;
pub use slider::{PageSlider, SliderPhase};

// Re-export the pieces hosts need alongside the slider
pub use pageslide_core::{FireReport, ListenerId};
pub use pageslide_platform::{Host, HostEvent, ScrollBehavior, Viewport};
