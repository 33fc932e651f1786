//! Headless document
//!
//! [`HeadlessDocument`] behaves like a browser page as far as a slider can
//! tell: it owns an element tree, a viewport, a scroll position and a clock.
//! Nothing happens on its own. Tests move time with
//! [`advance`](HeadlessDocument::advance), which drives any smooth scroll in
//! flight, and collect notifications with
//! [`take_pending`](HeadlessDocument::take_pending).

use std::time::Duration;

use pageslide_core::clamp;
use pageslide_platform::{Host, HostEvent, Result, ScrollBehavior, Viewport};
use smallvec::SmallVec;
use tracing::trace;

use crate::scroll::{ScrollCommand, SmoothScroll};
use crate::tree::{Node, NodeId, NodeTree};

/// Panel colors used by [`HeadlessDocument::build_slider_markup`]
const PANEL_COLORS: [&str; 5] = ["#e63946", "#f1faee", "#a8dadc", "#457b9d", "#1d3557"];

/// In-memory page with a virtual clock
#[derive(Debug)]
pub struct HeadlessDocument {
    tree: NodeTree,
    root: NodeId,
    body: NodeId,
    viewport: Viewport,
    scroll_y: f64,
    clock: Duration,
    animation: Option<SmoothScroll>,
    listening: SmallVec<[HostEvent; 2]>,
    pending: SmallVec<[HostEvent; 2]>,
    scroll_log: Vec<ScrollCommand>,
}

impl HeadlessDocument {
    /// Create an empty page (`html > body`) at time zero
    pub fn new(viewport: Viewport) -> Self {
        let mut tree = NodeTree::new();
        let root = tree.create("html");
        let body = tree.create("body");
        let _ = tree.insert_before(root, body, None);
        Self {
            tree,
            root,
            body,
            viewport,
            scroll_y: 0.0,
            clock: Duration::ZERO,
            animation: None,
            listening: SmallVec::new(),
            pending: SmallVec::new(),
            scroll_log: Vec::new(),
        }
    }

    // ========================================================================
    // Building pages
    // ========================================================================

    /// The `body` element
    pub fn body_node(&self) -> NodeId {
        self.body
    }

    /// Create a `tag` element and append it to `parent`
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append_new(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.tree.create(tag);
        self.tree
            .insert_before(parent, id, None)
            .expect("append_new: parent is not an element of this document");
        id
    }

    /// Build `body > main > div.js-page-slider > section.slide * count`
    ///
    /// Every slide carries a `data-color` attribute. Returns the container.
    pub fn build_slider_markup(&mut self, count: usize) -> NodeId {
        let main = self.append_new(self.body, "main");
        let container = self.append_new(main, "div");
        let _ = self.tree.add_class(container, "js-page-slider");
        for index in 0..count {
            let slide = self.append_new(container, "section");
            let _ = self.tree.add_class(slide, "slide");
            let _ = self
                .tree
                .set_attribute(slide, "data-color", PANEL_COLORS[index % PANEL_COLORS.len()]);
        }
        container
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> Result<()> {
        self.tree.set_attribute(element, name, value)
    }

    /// Inspect an element
    pub fn node(&self, element: NodeId) -> Option<&Node> {
        self.tree.get(element)
    }

    /// Whether `element` is attached to the page
    pub fn contains(&self, element: NodeId) -> bool {
        self.tree.is_inclusive_ancestor(self.root, element)
    }

    // ========================================================================
    // Driving the page
    // ========================================================================

    /// Move the clock forward, progressing any smooth scroll
    pub fn advance(&mut self, step: Duration) {
        self.clock += step;
        if let Some(animation) = self.animation {
            let (y, finished) = animation.sample(self.clock);
            if finished {
                self.animation = None;
            }
            self.set_scroll(y);
        }
    }

    /// Scroll as the user would, interrupting any smooth scroll
    pub fn user_scroll_to(&mut self, y: f64) {
        self.animation = None;
        let y = clamp(y, 0.0, self.max_scroll());
        self.set_scroll(y);
    }

    /// Change the viewport size
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.mark_pending(HostEvent::Resize);
            self.clamp_scroll();
        }
    }

    /// Consume a pending notification
    ///
    /// Returns `true` when `event` happened since the last call and someone
    /// listens for it.
    pub fn take_pending(&mut self, event: HostEvent) -> bool {
        match self.pending.iter().position(|e| *e == event) {
            Some(index) => {
                self.pending.remove(index);
                self.is_listening(event)
            }
            None => false,
        }
    }

    /// Whether a listener is registered for `event`
    pub fn is_listening(&self, event: HostEvent) -> bool {
        self.listening.contains(&event)
    }

    /// Every `scroll_to` request received, oldest first
    pub fn scroll_log(&self) -> &[ScrollCommand] {
        &self.scroll_log
    }

    /// Whether a smooth scroll is in flight
    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Document height: the body's `height` in pixels, else the viewport's
    pub fn document_height(&self) -> f64 {
        self.tree
            .style(self.body, "height")
            .and_then(|value| value.strip_suffix("px"))
            .and_then(|value| value.trim().parse::<f64>().ok())
            .unwrap_or(self.viewport.height)
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    fn set_scroll(&mut self, y: f64) {
        if y != self.scroll_y {
            trace!("headless scroll {} -> {}", self.scroll_y, y);
            self.scroll_y = y;
            self.mark_pending(HostEvent::Scroll);
        }
    }

    fn clamp_scroll(&mut self) {
        let y = clamp(self.scroll_y, 0.0, self.max_scroll());
        self.set_scroll(y);
    }

    fn mark_pending(&mut self, event: HostEvent) {
        if self.is_listening(event) && !self.pending.contains(&event) {
            self.pending.push(event);
        }
    }
}

impl Host for HeadlessDocument {
    type Element = NodeId;

    fn name(&self) -> &'static str {
        "headless"
    }

    fn now(&self) -> Duration {
        self.clock
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_log.push(ScrollCommand {
            top,
            behavior,
            at: self.clock,
        });
        let target = clamp(top, 0.0, self.max_scroll());
        match behavior {
            ScrollBehavior::Instant => {
                self.animation = None;
                self.set_scroll(target);
            }
            ScrollBehavior::Smooth => {
                if target == self.scroll_y {
                    self.animation = None;
                } else if self.animation.map(|a| a.target()) != Some(target) {
                    self.animation = Some(SmoothScroll::new(self.scroll_y, target, self.clock));
                }
            }
        }
    }

    fn listen(&mut self, event: HostEvent) {
        if !self.listening.contains(&event) {
            self.listening.push(event);
        }
    }

    fn unlisten(&mut self, event: HostEvent) {
        self.listening.retain(|e| *e != event);
        self.pending.retain(|e| *e != event);
    }

    fn body(&self) -> Result<NodeId> {
        Ok(self.body)
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        Ok(self.tree.create(tag))
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.tree.parent(*element)
    }

    fn children(&self, element: &NodeId) -> Vec<NodeId> {
        self.tree.children(*element).to_vec()
    }

    fn query_class(&self, root: &NodeId, class: &str) -> Vec<NodeId> {
        self.tree.descendants_with_class(*root, class)
    }

    fn insert_before(
        &mut self,
        parent: &NodeId,
        node: &NodeId,
        reference: Option<&NodeId>,
    ) -> Result<()> {
        self.tree.insert_before(*parent, *node, reference.copied())
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.tree.remove_child(*parent, *child)
    }

    fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.tree.style(*element, property).map(String::from)
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: Option<&str>) -> Result<()> {
        self.tree.set_style(*element, property, value)?;
        if *element == self.body && property == "height" {
            self.clamp_scroll();
        }
        Ok(())
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> Result<()> {
        self.tree.add_class(*element, class)
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.tree.has_class(*element, class)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.tree.attribute(*element, name).map(String::from)
    }
}
