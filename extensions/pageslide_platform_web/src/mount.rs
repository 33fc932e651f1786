//! JavaScript entry point
//!
//! `mount(selector, options)` finds the container, builds a [`WebHost`] and
//! a slider on it, and returns a [`SliderHandle`]. Browser events and timers
//! reach the slider through weak references to the shared state, so dropping
//! the handle tears everything down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Function, Reflect, JSON};
use pageslide::{Host, HostEvent, PageSlider, SliderData, SliderEvent, SliderEventKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::config::MountConfig;
use crate::glue::{KeyNavigation, PanelTint, Responsive};
use crate::host::{EventSink, WebHost};

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(js_error)?;
    JSON::parse(&json)
}

fn data_payload(data: &SliderData<Element>) -> Result<JsValue, JsValue> {
    let value = to_js(data)?;
    if let Some(slide) = &data.current_slide {
        Reflect::set(&value, &"currentSlide".into(), AsRef::<JsValue>::as_ref(slide))?;
    }
    Ok(value)
}

fn event_payload(event: &SliderEvent<Element>) -> Result<JsValue, JsValue> {
    match event {
        SliderEvent::Updated(data) => data_payload(data),
        SliderEvent::SlideChanged {
            previous,
            current,
            slide,
        } => {
            let value = to_js(&serde_json::json!({
                "previous": previous,
                "current": current,
            }))?;
            if let Some(slide) = slide {
                Reflect::set(&value, &"slide".into(), AsRef::<JsValue>::as_ref(slide))?;
            }
            Ok(value)
        }
    }
}

/// Subscribe a JS function to a slider notification
fn forward(slider: &mut PageSlider<WebHost>, kind: SliderEventKind, callback: Function) {
    slider.subscribe(kind, move |event| {
        let result = event_payload(event).and_then(|payload| callback.call1(&JsValue::NULL, &payload));
        if let Err(e) = result {
            tracing::warn!("{:?} callback failed: {:?}", kind, e);
        }
    });
}

/// Run `f` on the live state, then re-arm the timer pump
fn with_mounted(this: &Weak<RefCell<Mounted>>, f: impl FnOnce(&mut Mounted)) {
    let Some(state) = this.upgrade() else {
        return;
    };
    let Ok(mut mounted) = state.try_borrow_mut() else {
        tracing::warn!("page slider busy; browser event dropped");
        return;
    };
    f(&mut mounted);
    mounted.arm_timer();
}

// ============================================================================
// Mounted state
// ============================================================================

struct Mounted {
    this: Weak<RefCell<Mounted>>,
    host: WebHost,
    container: Element,
    config: MountConfig,
    slider: Option<PageSlider<WebHost>>,
    tint: Option<PanelTint<Element>>,
    callbacks: Vec<(SliderEventKind, Function)>,
    timer: Option<Timeout>,
    responsive: Option<EventListener>,
    keyboard: Option<EventListener>,
}

impl Mounted {
    fn build(&mut self) -> pageslide::Result<()> {
        if self.slider.is_some() {
            return Ok(());
        }
        let mut slider = PageSlider::new(
            &mut self.host,
            self.container.clone(),
            self.config.slider.clone(),
        )?;
        for (kind, callback) in &self.callbacks {
            forward(&mut slider, *kind, callback.clone());
        }
        self.slider = Some(slider);
        self.sync_tint();
        Ok(())
    }

    fn teardown(&mut self) {
        self.timer = None;
        if let Some(mut slider) = self.slider.take() {
            if let Err(e) = slider.clear(&mut self.host) {
                tracing::warn!("clearing page slider failed: {}", e);
            }
        }
        if let Some(tint) = self.tint.as_mut() {
            if let Err(e) = tint.reset(&mut self.host) {
                tracing::warn!("resetting panel tint failed: {}", e);
            }
        }
    }

    fn dispose(&mut self) {
        self.responsive = None;
        self.keyboard = None;
        self.teardown();
    }

    fn install_glue(&mut self) {
        if self.config.min_width.is_some() {
            let this = self.this.clone();
            self.responsive = Some(EventListener::new(self.host.window(), "resize", move |_| {
                with_mounted(&this, |mounted| {
                    if let Err(e) = mounted.apply_breakpoint() {
                        tracing::warn!("responsive remount failed: {}", e);
                    }
                })
            }));
        }
        if self.config.keyboard {
            let this = self.this.clone();
            self.keyboard = Some(EventListener::new(
                self.host.document(),
                "keydown",
                move |event| {
                    let navigation = event
                        .dyn_ref::<KeyboardEvent>()
                        .and_then(|event| KeyNavigation::from_key(&event.key()));
                    let Some(navigation) = navigation else {
                        return;
                    };
                    with_mounted(&this, |mounted| {
                        mounted.command(|slider, host| match navigation {
                            KeyNavigation::Previous => slider.previous(host),
                            KeyNavigation::Next => slider.next(host),
                        })
                    });
                },
            ));
        }
    }

    fn apply_breakpoint(&mut self) -> pageslide::Result<()> {
        let width = self.host.viewport().width;
        match Responsive::decide(self.slider.is_some(), self.config.wants_slider(width)) {
            Responsive::Mount => {
                tracing::debug!("viewport {}px: mounting page slider", width);
                self.build()
            }
            Responsive::Clear => {
                tracing::debug!("viewport {}px: clearing page slider", width);
                self.teardown();
                Ok(())
            }
            Responsive::Keep => Ok(()),
        }
    }

    fn handle(&mut self, event: HostEvent) {
        let Mounted { host, slider, .. } = self;
        let Some(slider) = slider.as_mut() else {
            return;
        };
        let result = match event {
            HostEvent::Scroll => slider.on_scroll(host),
            HostEvent::Resize => {
                slider.on_resize(host);
                Ok(())
            }
        };
        if let Err(e) = result {
            tracing::warn!("{} handling failed: {}", event.dom_name(), e);
        }
        self.sync_tint();
    }

    fn tick(&mut self) {
        if let Some(slider) = self.slider.as_mut() {
            if let Err(e) = slider.tick(&mut self.host) {
                tracing::warn!("timer work failed: {}", e);
            }
        }
        self.sync_tint();
    }

    fn command(&mut self, f: impl FnOnce(&mut PageSlider<WebHost>, &mut WebHost)) {
        match self.slider.as_mut() {
            Some(slider) => f(slider, &mut self.host),
            None => tracing::debug!("no page slider mounted; command ignored"),
        }
    }

    fn add_callback(&mut self, kind: SliderEventKind, callback: Function) {
        if let Some(slider) = self.slider.as_mut() {
            forward(slider, kind, callback.clone());
        }
        self.callbacks.push((kind, callback));
    }

    fn sync_tint(&mut self) {
        let (Some(tint), Some(slider)) = (self.tint.as_mut(), self.slider.as_ref()) else {
            return;
        };
        if let Err(e) = tint.sync(&mut self.host, slider.data()) {
            tracing::warn!("panel tint failed: {}", e);
        }
    }

    /// Keep one timeout armed for the slider's next deadline
    fn arm_timer(&mut self) {
        let deadline = self.slider.as_ref().and_then(PageSlider::next_deadline);
        self.timer = deadline.map(|deadline| {
            let delay = deadline.saturating_sub(self.host.now());
            let millis = u32::try_from(delay.as_micros().div_ceil(1000)).unwrap_or(u32::MAX);
            let this = self.this.clone();
            Timeout::new(millis, move || {
                with_mounted(&this, |mounted| {
                    // Already fired: release without clearing.
                    if let Some(fired) = mounted.timer.take() {
                        let _ = fired.forget();
                    }
                    mounted.tick();
                })
            })
        });
    }
}

// ============================================================================
// JS API
// ============================================================================

/// Handle returned by [`mount`]
#[wasm_bindgen]
pub struct SliderHandle {
    state: Rc<RefCell<Mounted>>,
}

impl SliderHandle {
    fn with<R>(&self, f: impl FnOnce(&mut Mounted) -> R) -> Result<R, JsValue> {
        let mut mounted = self
            .state
            .try_borrow_mut()
            .map_err(|_| js_error("page slider is busy"))?;
        let result = f(&mut mounted);
        mounted.arm_timer();
        Ok(result)
    }
}

#[wasm_bindgen]
impl SliderHandle {
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: i32) -> Result<(), JsValue> {
        self.with(|mounted| mounted.command(|slider, host| slider.go_to_slide(host, index as isize)))
    }

    pub fn next(&self) -> Result<(), JsValue> {
        self.with(|mounted| mounted.command(|slider, host| slider.next(host)))
    }

    pub fn previous(&self) -> Result<(), JsValue> {
        self.with(|mounted| mounted.command(|slider, host| slider.previous(host)))
    }

    /// Tear down the slider and every listener; the handle stays inert
    pub fn clear(&self) -> Result<(), JsValue> {
        self.with(Mounted::dispose)
    }

    /// Current state, or `null` while no slider is mounted
    pub fn data(&self) -> Result<JsValue, JsValue> {
        self.with(|mounted| mounted.slider.as_ref().map(|slider| data_payload(slider.data())))?
            .unwrap_or(Ok(JsValue::NULL))
    }

    #[wasm_bindgen(js_name = onUpdated)]
    pub fn on_updated(&self, callback: Function) -> Result<(), JsValue> {
        self.with(|mounted| mounted.add_callback(SliderEventKind::Updated, callback))
    }

    #[wasm_bindgen(js_name = onSlideChanged)]
    pub fn on_slide_changed(&self, callback: Function) -> Result<(), JsValue> {
        self.with(|mounted| mounted.add_callback(SliderEventKind::SlideChanged, callback))
    }

    /// Whether a slider is currently mounted
    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.state
            .try_borrow()
            .map(|mounted| mounted.slider.is_some())
            .unwrap_or(false)
    }
}

fn read_config(options: &JsValue) -> Result<MountConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(MountConfig::default());
    }
    let json = String::from(JSON::stringify(options)?);
    MountConfig::from_json(&json).map_err(js_error)
}

/// Mount a page slider on the first element matching `selector`
#[wasm_bindgen]
pub fn mount(selector: &str, options: JsValue) -> Result<SliderHandle, JsValue> {
    let config = read_config(&options)?;
    config.validate().map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("window has no document"))?;
    let container = document
        .query_selector(selector)?
        .ok_or_else(|| js_error(format!("no element matches {:?}", selector)))?;
    let panel = match &config.panel_selector {
        Some(panel_selector) => Some(
            document
                .query_selector(panel_selector)?
                .ok_or_else(|| js_error(format!("no element matches {:?}", panel_selector)))?,
        ),
        None => None,
    };

    let state = Rc::new_cyclic(|this: &Weak<RefCell<Mounted>>| {
        let events = this.clone();
        let sink: EventSink =
            Rc::new(move |event: HostEvent| with_mounted(&events, |mounted| mounted.handle(event)));
        RefCell::new(Mounted {
            this: this.clone(),
            host: WebHost::from_parts(window, document, sink),
            container,
            tint: panel.map(|panel| {
                PanelTint::new(panel, &config.panel_property, &config.color_attribute)
            }),
            config,
            slider: None,
            callbacks: Vec::new(),
            timer: None,
            responsive: None,
            keyboard: None,
        })
    });

    {
        let mut mounted = state.borrow_mut();
        mounted.install_glue();
        mounted.apply_breakpoint().map_err(js_error)?;
        mounted.arm_timer();
    }
    tracing::debug!("page slider mounted on {}", selector);
    Ok(SliderHandle { state })
}
