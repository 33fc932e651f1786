//! Pageslide Browser Host
//!
//! Runs a page slider on a real page, compiled to `wasm32-unknown-unknown`.
//!
//! # Components
//!
//! - `WebHost`: [`pageslide_platform::Host`] over `web-sys`, with `gloo`
//!   event listeners on the window
//! - `mount()` / `SliderHandle`: the JavaScript API, with a `gloo` timeout
//!   pump for the slider's deadlines
//! - [`MountConfig`]: slider options plus responsive, keyboard and panel glue
//! - `logging`: `tracing` output to the browser console
//!
//! Everything touching the browser only exists on wasm32; the configuration
//! and glue logic build everywhere and are tested against the headless host.
//!
//! # Example
//!
//! ```js
//! import init, { mount } from "./pkg/pageslide_platform_web.js";
//!
//! await init();
//! const slider = mount(".js-page-slider", {
//!   multiplier: 1,
//!   minWidth: 1024,
//!   keyboard: true,
//!   panelSelector: ".js-works-panel",
//! });
//! slider.onSlideChanged(({ current }) => console.log("slide", current));
//! ```

pub mod config;
pub mod glue;

#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
mod mount;

pub use config::MountConfig;
pub use glue::{KeyNavigation, PanelTint, Responsive};

#[cfg(target_arch = "wasm32")]
pub use host::{EventSink, WebHost};
#[cfg(target_arch = "wasm32")]
pub use mount::{mount, SliderHandle};

/// Module start: panic hook and console logging
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);
}
