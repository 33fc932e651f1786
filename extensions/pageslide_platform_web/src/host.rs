//! Browser host
//!
//! [`WebHost`] implements [`Host`] over the live DOM with `web-sys`. Scroll
//! and resize listeners are `gloo` [`EventListener`]s on the window; each one
//! forwards to the sink the host was built with. Dropping a listener
//! unregisters it, so `unlisten` and dropping the host both detach cleanly.

use std::rc::Rc;
use std::time::Duration;

use gloo::events::EventListener;
use pageslide_platform::{Host, HostEvent, PlatformError, Result, ScrollBehavior, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Node, ScrollToOptions, Window};

/// Receives host notifications from the browser
pub type EventSink = Rc<dyn Fn(HostEvent)>;

fn js_error(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{}: {}", context, message),
        None => format!("{}: {:?}", context, err),
    }
}

/// The browser window and document
pub struct WebHost {
    window: Window,
    document: Document,
    sink: EventSink,
    listeners: Vec<(HostEvent, EventListener)>,
}

impl WebHost {
    /// Host over the current window
    pub fn new(sink: EventSink) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PlatformError::Unavailable("no global window".into()))?;
        Self::from_window(window, sink)
    }

    pub fn from_window(window: Window, sink: EventSink) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| PlatformError::Unavailable("window has no document".into()))?;
        Ok(Self::from_parts(window, document, sink))
    }

    pub fn from_parts(window: Window, document: Document, sink: EventSink) -> Self {
        Self {
            window,
            document,
            sink,
            listeners: Vec::new(),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// First element matching a CSS selector
    pub fn query_selector(&self, selector: &str) -> Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|e| PlatformError::Other(js_error(selector, e)))
    }

    fn inline_style(element: &Element) -> Result<CssStyleDeclaration> {
        element
            .dyn_ref::<HtmlElement>()
            .map(HtmlElement::style)
            .ok_or_else(|| {
                PlatformError::Style(format!("<{}> has no inline style", element.tag_name()))
            })
    }
}

impl Host for WebHost {
    type Element = Element;

    fn name(&self) -> &'static str {
        "web"
    }

    fn now(&self) -> Duration {
        let millis = self
            .window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now);
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }

    fn viewport(&self) -> Viewport {
        let dimension = |value: std::result::Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn listen(&mut self, event: HostEvent) {
        if self.listeners.iter().any(|(e, _)| *e == event) {
            return;
        }
        let sink = Rc::clone(&self.sink);
        let listener = EventListener::new(&self.window, event.dom_name(), move |_| sink(event));
        self.listeners.push((event, listener));
    }

    fn unlisten(&mut self, event: HostEvent) {
        self.listeners.retain(|(e, _)| *e != event);
    }

    fn body(&self) -> Result<Element> {
        self.document
            .body()
            .map(Element::from)
            .ok_or_else(|| PlatformError::Unavailable("document has no body".into()))
    }

    fn create_element(&mut self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| PlatformError::ElementCreation(js_error(tag, e)))
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn children(&self, element: &Element) -> Vec<Element> {
        let children = element.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .collect()
    }

    fn query_class(&self, root: &Element, class: &str) -> Vec<Element> {
        let found = root.get_elements_by_class_name(class);
        (0..found.length())
            .filter_map(|index| found.item(index))
            .collect()
    }

    fn insert_before(
        &mut self,
        parent: &Element,
        node: &Element,
        reference: Option<&Element>,
    ) -> Result<()> {
        let reference = reference.map(AsRef::<Node>::as_ref);
        parent
            .insert_before(node, reference)
            .map(drop)
            .map_err(|e| PlatformError::TreeMutation(js_error("insertBefore", e)))
    }

    fn remove_child(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .remove_child(child)
            .map(drop)
            .map_err(|e| PlatformError::TreeMutation(js_error("removeChild", e)))
    }

    fn style(&self, element: &Element, property: &str) -> Option<String> {
        Self::inline_style(element)
            .ok()?
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&mut self, element: &Element, property: &str, value: Option<&str>) -> Result<()> {
        let style = Self::inline_style(element)?;
        let result = match value {
            Some(value) if !value.is_empty() => style.set_property(property, value),
            _ => style.remove_property(property).map(drop),
        };
        result.map_err(|e| PlatformError::Style(js_error(property, e)))
    }

    fn add_class(&mut self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| PlatformError::Other(js_error(class, e)))
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }
}

impl std::fmt::Debug for WebHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebHost")
            .field(
                "listening",
                &self.listeners.iter().map(|(e, _)| *e).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
