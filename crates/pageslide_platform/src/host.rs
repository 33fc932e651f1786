//! Host trait

use std::fmt::Debug;
use std::time::Duration;

use crate::error::Result;
use crate::event::{HostEvent, ScrollBehavior};
use crate::viewport::Viewport;

/// Environment abstraction for a page slider
///
/// This trait is implemented by each host backend (headless document,
/// browser) to give the slider a uniform view of the page: the viewport,
/// the document scroll position, a monotonic clock and a small subset of
/// element tree operations.
///
/// Element handles are cheap to clone and compare by identity.
pub trait Host {
    /// Handle to an element in the host's tree
    type Element: Clone + PartialEq + Debug;

    /// Get the host name
    ///
    /// Returns a string like "headless" or "web".
    fn name(&self) -> &'static str;

    /// Time elapsed since the host's origin
    fn now(&self) -> Duration;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Current vertical document scroll position
    fn scroll_y(&self) -> f64;

    /// Scroll the document vertically to `top`
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Start delivering `event` to the slider
    fn listen(&mut self, event: HostEvent);

    /// Stop delivering `event`
    fn unlisten(&mut self, event: HostEvent);

    /// The document body
    fn body(&self) -> Result<Self::Element>;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> Result<Self::Element>;

    /// Parent of `element`, if attached
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Element children of `element`, in document order
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    /// Descendants of `root` carrying `class`, in document order
    fn query_class(&self, root: &Self::Element, class: &str) -> Vec<Self::Element>;

    /// Insert `node` into `parent` before `reference`
    ///
    /// A `None` reference appends. Inserting a node that already has a parent
    /// moves it.
    fn insert_before(
        &mut self,
        parent: &Self::Element,
        node: &Self::Element,
        reference: Option<&Self::Element>,
    ) -> Result<()>;

    /// Remove `child` from `parent`
    fn remove_child(&mut self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Inline style value of `property`, `None` when unset
    fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

    /// Set (`Some`) or remove (`None`) an inline style property
    fn set_style(
        &mut self,
        element: &Self::Element,
        property: &str,
        value: Option<&str>,
    ) -> Result<()>;

    /// Add a class to `element`
    fn add_class(&mut self, element: &Self::Element, class: &str) -> Result<()>;

    /// Whether `element` carries `class`
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Attribute value, `None` when absent
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
}
