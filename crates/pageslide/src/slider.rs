//! Page slider component
//!
//! Turns vertical document scroll into horizontal movement of a row of
//! full-viewport slides.
//!
//! # Lifecycle
//!
//! ```text
//! PageSlider::new ──► Active ──clear()──► Cleared
//!                      │  ▲
//!       on_scroll / on_resize / tick
//! ```
//!
//! While active, the host forwards scroll and resize notifications and calls
//! [`PageSlider::tick`] once [`PageSlider::next_deadline`] has passed. Every
//! entry point is a no-op once the slider is cleared.

use std::fmt;
use std::time::Duration;

use pageslide_core::{earliest, Debounce, EventHub, ListenerId, Throttle};
use pageslide_platform::{Host, HostEvent, ScrollBehavior};

use crate::config::PageSliderOptions;
use crate::data::{SliderData, SliderEvent, SliderEventKind};
use crate::dom::{unwrap_element, wrap_element, StyleOverrides};
use crate::error::Result;
use crate::geometry::SlideGeometry;

/// Lifecycle phase of a slider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderPhase {
    /// Wrapped, sized and tracking scroll
    Active,
    /// Torn down; the page is back to its original shape
    Cleared,
}

/// Scroll-driven horizontal slider
///
/// Owns the generated wrapper element, the inline style overrides it applied
/// to the page, its rate-limiting gates and its notification hub. The host is
/// borrowed for each call rather than owned.
pub struct PageSlider<H: Host> {
    container: H::Element,
    wrapper: H::Element,
    /// Captured once; never re-queried
    slides: Vec<H::Element>,
    options: PageSliderOptions,
    data: SliderData<H::Element>,
    events: EventHub<SliderEvent<H::Element>>,
    styles: StyleOverrides<H::Element>,
    scroll_gate: Throttle,
    resize_gate: Debounce,
    auto_center: Debounce,
    /// Index last marked active
    revealed_index: Option<isize>,
    phase: SliderPhase,
}

impl<H: Host> fmt::Debug for PageSlider<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSlider")
            .field("container", &self.container)
            .field("wrapper", &self.wrapper)
            .field("slides", &self.slides.len())
            .field("data", &self.data)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<H: Host> PageSlider<H> {
    /// Build a slider over `container`
    ///
    /// Captures the slides, wraps the container in a fixed-position wrapper,
    /// sizes the page, asks the host for scroll and resize notifications and
    /// computes the initial state (firing `Updated`).
    ///
    /// # Errors
    ///
    /// Invalid options, a container without a parent, or any host failure
    /// while editing the page.
    pub fn new(host: &mut H, container: H::Element, options: PageSliderOptions) -> Result<Self> {
        options.validate()?;

        let slides = host.query_class(&container, &options.slide_class);
        let wrapper = Self::generate_wrapper(host, &container, &options)?;

        let mut slider = Self {
            data: SliderData::new(slides.len()),
            events: EventHub::new(),
            styles: StyleOverrides::new(),
            scroll_gate: Throttle::new(options.scroll_throttle()),
            resize_gate: Debounce::new(options.resize_debounce()),
            auto_center: Debounce::new(options.auto_center_delay()),
            revealed_index: None,
            phase: SliderPhase::Active,
            container,
            wrapper,
            slides,
            options,
        };

        slider.draw(host)?;
        slider.attach_events(host);
        slider.update(host, false)?;

        tracing::debug!(
            "page slider ready on {} host: {} slides, multiplier {}",
            host.name(),
            slider.slides.len(),
            slider.options.multiplier
        );
        Ok(slider)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Smooth-scroll to the position of slide `index`
    ///
    /// The index is not validated; out-of-range indexes scroll to
    /// out-of-range positions, which the host may clamp.
    pub fn go_to_slide(&mut self, host: &mut H, index: isize) {
        if self.is_cleared() {
            tracing::warn!("go_to_slide({}) ignored: slider was cleared", index);
            return;
        }
        let target = self.geometry(host).scroll_for_slide(index);
        tracing::debug!("go to slide {} (scroll target {})", index, target);
        host.scroll_to(target, ScrollBehavior::Smooth);
    }

    /// Move to the next slide; no-op on the last one
    pub fn next(&mut self, host: &mut H) {
        let next_index = self.data.current_index + 1;
        if next_index < self.slides.len() as isize {
            self.go_to_slide(host, next_index);
        }
    }

    /// Move to the previous slide; no-op on the first one
    pub fn previous(&mut self, host: &mut H) {
        let prev_index = self.data.current_index - 1;
        if prev_index >= 0 {
            self.go_to_slide(host, prev_index);
        }
    }

    /// Tear the slider down and restore the page
    ///
    /// Stops notifications, cancels pending timers, restores every inline
    /// style the slider touched, unwraps the container and marks all slides
    /// active. Clearing twice is a no-op.
    pub fn clear(&mut self, host: &mut H) -> Result<()> {
        if self.is_cleared() {
            return Ok(());
        }

        for event in HostEvent::ALL {
            host.unlisten(event);
        }
        self.scroll_gate.cancel();
        self.resize_gate.cancel();
        self.auto_center.cancel();

        self.styles.restore(host)?;
        unwrap_element(host, &self.wrapper)?;
        for slide in &self.slides {
            host.add_class(slide, &self.options.active_class)?;
        }

        self.phase = SliderPhase::Cleared;
        tracing::debug!("page slider cleared");
        Ok(())
    }

    // ========================================================================
    // Host notifications
    // ========================================================================

    /// Scroll notification (throttled)
    pub fn on_scroll(&mut self, host: &mut H) -> Result<()> {
        if self.is_cleared() {
            return Ok(());
        }
        if self.scroll_gate.call(host.now()) {
            self.update(host, true)?;
        }
        Ok(())
    }

    /// Resize notification (debounced)
    pub fn on_resize(&mut self, host: &mut H) {
        if self.is_cleared() {
            return;
        }
        self.resize_gate.call(host.now());
    }

    /// Run timer work that has become due
    ///
    /// Delivers the trailing scroll update, the resize redraw and the
    /// auto-center settle, in that order.
    pub fn tick(&mut self, host: &mut H) -> Result<()> {
        if self.is_cleared() {
            return Ok(());
        }
        let now = host.now();
        if self.scroll_gate.poll(now) {
            self.update(host, true)?;
        }
        if self.resize_gate.poll(now) {
            self.draw(host)?;
        }
        if self.auto_center.poll(now) {
            self.settle(host);
        }
        Ok(())
    }

    /// When [`tick`](Self::tick) next has work to do
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.is_cleared() {
            return None;
        }
        earliest([
            self.scroll_gate.deadline(),
            self.resize_gate.deadline(),
            self.auto_center.deadline(),
        ])
    }

    // ========================================================================
    // Read model
    // ========================================================================

    /// Current state snapshot
    pub fn data(&self) -> &SliderData<H::Element> {
        &self.data
    }

    /// Options the slider was built with
    pub fn options(&self) -> &PageSliderOptions {
        &self.options
    }

    /// Slides captured at construction
    pub fn slides(&self) -> &[H::Element] {
        &self.slides
    }

    /// The slide container
    pub fn container(&self) -> &H::Element {
        &self.container
    }

    /// The generated wrapper
    pub fn wrapper(&self) -> &H::Element {
        &self.wrapper
    }

    /// Lifecycle phase
    pub fn phase(&self) -> SliderPhase {
        self.phase
    }

    /// Whether [`clear`](Self::clear) has run
    pub fn is_cleared(&self) -> bool {
        self.phase == SliderPhase::Cleared
    }

    /// Geometry for the host's current viewport
    pub fn geometry(&self, host: &H) -> SlideGeometry {
        SlideGeometry::new(self.slides.len(), self.options.multiplier, host.viewport())
    }

    /// Notification hub
    pub fn events(&self) -> &EventHub<SliderEvent<H::Element>> {
        &self.events
    }

    /// Notification hub, for subscribing
    pub fn events_mut(&mut self) -> &mut EventHub<SliderEvent<H::Element>> {
        &mut self.events
    }

    /// Subscribe to a notification kind
    pub fn subscribe<F>(&mut self, kind: SliderEventKind, callback: F) -> ListenerId
    where
        F: FnMut(&SliderEvent<H::Element>) + 'static,
    {
        self.events.add(kind, callback)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn generate_wrapper(
        host: &mut H,
        container: &H::Element,
        options: &PageSliderOptions,
    ) -> Result<H::Element> {
        let wrapper = host.create_element("div")?;
        host.add_class(&wrapper, &options.wrapper_class)?;
        host.set_style(&wrapper, "position", Some("fixed"))?;
        host.set_style(&wrapper, "left", Some("0"))?;
        host.set_style(&wrapper, "top", Some("0"))?;
        wrap_element(host, container, &wrapper)?;
        Ok(wrapper)
    }

    /// Size the page so its scroll range drives the slide row
    fn draw(&mut self, host: &mut H) -> Result<()> {
        let geometry = self.geometry(host);
        let body = host.body()?;

        self.styles.apply(host, &body, "overflow-x", "hidden")?;
        self.styles
            .apply(host, &body, "height", &px(geometry.document_height()))?;
        self.styles.apply(host, &self.container, "display", "flex")?;
        self.styles
            .apply(host, &self.container, "width", &px(geometry.row_width()))?;
        Ok(())
    }

    fn attach_events(&mut self, host: &mut H) {
        for event in HostEvent::ALL {
            host.listen(event);
        }
    }

    /// Recompute state from the scroll position
    fn update(&mut self, host: &mut H, from_scroll: bool) -> Result<()> {
        self.move_slider(host)?;
        self.update_data(host);
        self.update_slide_classes(host)?;

        self.events.fire(&SliderEvent::Updated(self.data.clone()));

        if from_scroll && self.options.auto_center {
            self.auto_center.call(host.now());
        }
        Ok(())
    }

    fn move_slider(&mut self, host: &mut H) -> Result<()> {
        let left_indent = self.geometry(host).left_indent_for_scroll(host.scroll_y());
        let offset = if left_indent == 0.0 { 0.0 } else { -left_indent };
        host.set_style(&self.wrapper, "left", Some(&px(offset)))?;
        self.data.left_indent = left_indent;
        Ok(())
    }

    fn update_data(&mut self, host: &H) {
        let geometry = self.geometry(host);
        let left_indent = self.data.left_indent;
        let current_index = geometry.nearest_index(left_indent);

        self.data.current_index = current_index;
        self.data.current_slide = usize::try_from(current_index)
            .ok()
            .and_then(|index| self.slides.get(index))
            .cloned();
        self.data.distance_to_next_slide = geometry.distance_to_slide(left_indent, current_index);

        tracing::trace!(
            "indent {:.1}px -> slide {} (distance {:.3})",
            left_indent,
            current_index,
            self.data.distance_to_next_slide
        );
    }

    /// Mark a newly reached slide active; earlier slides keep their mark
    fn update_slide_classes(&mut self, host: &mut H) -> Result<()> {
        let current = self.data.current_index;
        if self.revealed_index == Some(current) {
            return Ok(());
        }
        let previous = self.revealed_index.replace(current);

        if let Some(slide) = &self.data.current_slide {
            host.add_class(slide, &self.options.active_class)?;
        }
        self.events.fire(&SliderEvent::SlideChanged {
            previous,
            current,
            slide: self.data.current_slide.clone(),
        });
        Ok(())
    }

    /// Auto-center: snap when close enough to the nearest slide
    fn settle(&mut self, host: &mut H) {
        if self.data.distance_to_next_slide < self.options.auto_center_threshold {
            self.go_to_slide(host, self.data.current_index);
        }
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageslide_platform::Viewport;
    use pageslide_platform_headless::{HeadlessDocument, NodeId};
    use std::cell::RefCell;
    use std::rc::Rc;

    const STEP: Duration = Duration::from_millis(5);

    fn setup(
        count: usize,
        options: PageSliderOptions,
    ) -> (HeadlessDocument, PageSlider<HeadlessDocument>) {
        let mut doc = HeadlessDocument::new(Viewport::new(1000.0, 800.0));
        let container = doc.build_slider_markup(count);
        let slider = PageSlider::new(&mut doc, container, options).unwrap();
        (doc, slider)
    }

    /// Advance time, delivering notifications and timers like a browser would
    fn run_for(
        doc: &mut HeadlessDocument,
        slider: &mut PageSlider<HeadlessDocument>,
        span: Duration,
    ) {
        let end = doc.now() + span;
        while doc.now() < end {
            doc.advance(STEP);
            if doc.take_pending(HostEvent::Scroll) {
                slider.on_scroll(doc).unwrap();
            }
            if doc.take_pending(HostEvent::Resize) {
                slider.on_resize(doc);
            }
            slider.tick(doc).unwrap();
        }
    }

    fn user_scroll(doc: &mut HeadlessDocument, slider: &mut PageSlider<HeadlessDocument>, y: f64) {
        doc.user_scroll_to(y);
        assert!(doc.take_pending(HostEvent::Scroll));
        slider.on_scroll(doc).unwrap();
    }

    #[test]
    fn test_construction_sizes_page() {
        let (doc, slider) = setup(5, PageSliderOptions::standard());
        let body = doc.body_node();

        assert_eq!(slider.data().nb_slides, 5);
        assert_eq!(doc.style(&body, "height").as_deref(), Some("4000px"));
        assert_eq!(doc.style(&body, "overflow-x").as_deref(), Some("hidden"));
        assert_eq!(
            doc.style(slider.container(), "width").as_deref(),
            Some("5000px")
        );
        assert_eq!(
            doc.style(slider.container(), "display").as_deref(),
            Some("flex")
        );
        assert!(doc.is_listening(HostEvent::Scroll));
        assert!(doc.is_listening(HostEvent::Resize));
    }

    #[test]
    fn test_construction_wraps_container() {
        let (doc, slider) = setup(3, PageSliderOptions::standard());
        let wrapper = *slider.wrapper();

        assert_eq!(doc.parent(slider.container()), Some(wrapper));
        assert!(doc.has_class(&wrapper, "js-page-slider-wrapper"));
        assert_eq!(doc.style(&wrapper, "position").as_deref(), Some("fixed"));
        assert_eq!(doc.style(&wrapper, "top").as_deref(), Some("0"));
    }

    #[test]
    fn test_initial_state_marks_first_slide() {
        let (doc, slider) = setup(4, PageSliderOptions::standard());
        let first = slider.slides()[0];

        assert_eq!(slider.data().current_index, 0);
        assert_eq!(slider.data().current_slide, Some(first));
        assert!(doc.has_class(&first, "active"));
        assert!(!doc.has_class(&slider.slides()[1], "active"));
        assert_eq!(doc.style(slider.wrapper(), "left").as_deref(), Some("0px"));
    }

    #[test]
    fn test_detached_container_fails_fast() {
        let mut doc = HeadlessDocument::new(Viewport::new(1000.0, 800.0));
        let loose = doc.create_element("div").unwrap();
        let err = PageSlider::new(&mut doc, loose, PageSliderOptions::standard()).unwrap_err();
        assert!(matches!(err, crate::SliderError::DetachedContainer));
    }

    #[test]
    fn test_scroll_moves_wrapper() {
        let (mut doc, mut slider) = setup(5, PageSliderOptions::static_snap());
        run_for(&mut doc, &mut slider, Duration::from_millis(50));

        user_scroll(&mut doc, &mut slider, 1000.0);

        assert_eq!(slider.data().left_indent, 1250.0);
        assert_eq!(slider.data().current_index, 1);
        assert_eq!(slider.data().distance_to_next_slide, 0.5);
        assert_eq!(
            doc.style(slider.wrapper(), "left").as_deref(),
            Some("-1250px")
        );
    }

    #[test]
    fn test_active_class_is_additive() {
        let (mut doc, mut slider) = setup(5, PageSliderOptions::static_snap());
        run_for(&mut doc, &mut slider, Duration::from_millis(50));

        user_scroll(&mut doc, &mut slider, 1600.0);
        run_for(&mut doc, &mut slider, Duration::from_millis(50));

        let slides = slider.slides().to_vec();
        assert_eq!(slider.data().current_index, 2);
        assert!(doc.has_class(&slides[0], "active"));
        assert!(!doc.has_class(&slides[1], "active"));
        assert!(doc.has_class(&slides[2], "active"));
    }

    #[test]
    fn test_go_to_slide_scroll_target() {
        let (mut doc, mut slider) = setup(5, PageSliderOptions::standard());
        slider.go_to_slide(&mut doc, 2);

        let command = doc.scroll_log().last().copied().unwrap();
        assert_eq!(command.top, 1600.0);
        assert_eq!(command.behavior, ScrollBehavior::Smooth);

        run_for(&mut doc, &mut slider, Duration::from_millis(600));
        assert_eq!(doc.scroll_y(), 1600.0);
        assert_eq!(slider.data().current_index, 2);
    }

    #[test]
    fn test_go_to_slide_out_of_range_is_not_validated() {
        let (mut doc, mut slider) = setup(5, PageSliderOptions::standard());
        slider.go_to_slide(&mut doc, 7);
        assert_eq!(doc.scroll_log().last().unwrap().top, 5600.0);
    }

    #[test]
    fn test_next_and_previous_bounds() {
        let (mut doc, mut slider) = setup(3, PageSliderOptions::static_snap());

        slider.previous(&mut doc);
        assert!(doc.scroll_log().is_empty());

        slider.next(&mut doc);
        run_for(&mut doc, &mut slider, Duration::from_millis(600));
        assert_eq!(slider.data().current_index, 1);

        slider.next(&mut doc);
        run_for(&mut doc, &mut slider, Duration::from_millis(600));
        assert_eq!(slider.data().current_index, 2);

        let commands = doc.scroll_log().len();
        slider.next(&mut doc);
        assert_eq!(doc.scroll_log().len(), commands);

        slider.previous(&mut doc);
        run_for(&mut doc, &mut slider, Duration::from_millis(600));
        assert_eq!(slider.data().current_index, 1);
    }

    #[test]
    fn test_auto_center_snaps_when_close() {
        let options = PageSliderOptions::standard().with_auto_center_delay(300);
        let (mut doc, mut slider) = setup(5, options);
        let geometry = slider.geometry(&doc);

        // 20% of the way from slide 1 to slide 2.
        let (from, to) = (geometry.scroll_for_slide(1), geometry.scroll_for_slide(2));
        let y = from + 0.2 * (to - from);
        user_scroll(&mut doc, &mut slider, y);
        assert!(slider.data().distance_to_next_slide < 0.45);

        run_for(&mut doc, &mut slider, Duration::from_millis(295));
        assert!(doc.scroll_log().is_empty());

        run_for(&mut doc, &mut slider, Duration::from_millis(700));
        assert_eq!(doc.scroll_log()[0].top, geometry.scroll_for_slide(1));
        assert_eq!(doc.scroll_y(), geometry.scroll_for_slide(1));
        assert_eq!(slider.data().distance_to_next_slide, 0.0);
    }

    #[test]
    fn test_auto_center_skips_when_far() {
        let options = PageSliderOptions::standard().with_auto_center_delay(300);
        let (mut doc, mut slider) = setup(5, options);

        // Halfway between slides 1 and 2: distance ~1.
        user_scroll(&mut doc, &mut slider, 1190.0);
        assert!(slider.data().distance_to_next_slide >= 0.45);

        run_for(&mut doc, &mut slider, Duration::from_millis(1000));
        assert!(doc.scroll_log().is_empty());
    }

    #[test]
    fn test_auto_center_restarts_on_each_scroll() {
        let options = PageSliderOptions::standard().with_auto_center_delay(300);
        let (mut doc, mut slider) = setup(5, options);

        for step in 0..5 {
            user_scroll(&mut doc, &mut slider, 820.0 + step as f64 * 10.0);
            run_for(&mut doc, &mut slider, Duration::from_millis(200));
        }
        assert!(doc.scroll_log().is_empty());

        run_for(&mut doc, &mut slider, Duration::from_millis(200));
        assert_eq!(doc.scroll_log().len(), 1);
    }

    #[test]
    fn test_disabled_auto_center_never_scrolls() {
        let (mut doc, mut slider) = setup(5, PageSliderOptions::static_snap());
        user_scroll(&mut doc, &mut slider, 850.0);
        run_for(&mut doc, &mut slider, Duration::from_millis(3000));
        assert!(doc.scroll_log().is_empty());
        assert_eq!(slider.next_deadline(), None);
    }

    #[test]
    fn test_updated_and_slide_changed_notifications() {
        let (mut doc, mut slider) = setup(5, PageSliderOptions::static_snap());
        let log = Rc::new(RefCell::new(Vec::new()));

        let sink = log.clone();
        slider.subscribe(SliderEventKind::Updated, move |event| {
            if let Some(data) = event.data() {
                sink.borrow_mut().push(format!("updated {}", data.current_index));
            }
        });
        let sink = log.clone();
        slider.subscribe(SliderEventKind::SlideChanged, move |event| {
            if let SliderEvent::SlideChanged {
                previous, current, ..
            } = event
            {
                sink.borrow_mut()
                    .push(format!("changed {:?} -> {}", previous, current));
            }
        });

        run_for(&mut doc, &mut slider, Duration::from_millis(50));
        user_scroll(&mut doc, &mut slider, 100.0);
        run_for(&mut doc, &mut slider, Duration::from_millis(50));
        user_scroll(&mut doc, &mut slider, 900.0);

        assert_eq!(
            *log.borrow(),
            vec!["updated 0", "changed Some(0) -> 1", "updated 1"]
        );
    }

    #[test]
    fn test_scroll_is_throttled() {
        let options = PageSliderOptions::static_snap().with_scroll_throttle(100);
        let (mut doc, mut slider) = setup(5, options);
        let updates = Rc::new(RefCell::new(0));
        let sink = updates.clone();
        slider.subscribe(SliderEventKind::Updated, move |_| *sink.borrow_mut() += 1);

        run_for(&mut doc, &mut slider, Duration::from_millis(200));
        for i in 0..10 {
            doc.user_scroll_to(100.0 + i as f64 * 50.0);
            if doc.take_pending(HostEvent::Scroll) {
                slider.on_scroll(&mut doc).unwrap();
            }
            doc.advance(Duration::from_millis(5));
        }
        run_for(&mut doc, &mut slider, Duration::from_millis(200));

        // Leading edge plus one trailing update.
        assert_eq!(*updates.borrow(), 2);
        assert_eq!(slider.data().left_indent, 550.0 * 4000.0 / 3200.0);
    }

    #[test]
    fn test_resize_redraws_after_debounce() {
        let (mut doc, mut slider) = setup(4, PageSliderOptions::static_snap());
        let body = doc.body_node();

        doc.resize(Viewport::new(1200.0, 600.0));
        run_for(&mut doc, &mut slider, Duration::from_millis(100));
        assert_eq!(doc.style(&body, "height").as_deref(), Some("3200px"));

        run_for(&mut doc, &mut slider, Duration::from_millis(150));
        assert_eq!(doc.style(&body, "height").as_deref(), Some("2400px"));
        assert_eq!(
            doc.style(slider.container(), "width").as_deref(),
            Some("4800px")
        );
        assert_eq!(slider.slides().len(), 4);
    }

    #[test]
    fn test_resize_does_not_requery_slides() {
        let (mut doc, mut slider) = setup(3, PageSliderOptions::static_snap());
        let container = *slider.container();
        let extra = doc.append_new(container, "section");
        doc.add_class(&extra, "slide").unwrap();

        doc.resize(Viewport::new(900.0, 700.0));
        run_for(&mut doc, &mut slider, Duration::from_millis(400));

        assert_eq!(slider.data().nb_slides, 3);
        assert_eq!(doc.style(&container, "width").as_deref(), Some("2700px"));
    }

    #[test]
    fn test_clear_restores_page() {
        let mut doc = HeadlessDocument::new(Viewport::new(1000.0, 800.0));
        let body = doc.body_node();
        doc.set_style(&body, "height", Some("100%")).unwrap();
        let container = doc.build_slider_markup(4);
        let parent = doc.parent(&container).unwrap();
        let siblings_before = doc.children(&parent);

        let mut slider =
            PageSlider::new(&mut doc, container, PageSliderOptions::standard()).unwrap();
        let wrapper = *slider.wrapper();
        user_scroll(&mut doc, &mut slider, 500.0);

        slider.clear(&mut doc).unwrap();

        assert_eq!(slider.phase(), SliderPhase::Cleared);
        assert_eq!(doc.children(&parent), siblings_before);
        assert_eq!(doc.parent(&container), Some(parent));
        assert!(!doc.contains(wrapper));
        assert_eq!(doc.style(&body, "height").as_deref(), Some("100%"));
        assert_eq!(doc.style(&body, "overflow-x"), None);
        assert_eq!(doc.style(&container, "width"), None);
        assert_eq!(doc.style(&container, "display"), None);
        assert!(!doc.is_listening(HostEvent::Scroll));
        assert!(!doc.is_listening(HostEvent::Resize));
        for slide in slider.slides() {
            assert!(doc.has_class(slide, "active"));
        }
    }

    #[test]
    fn test_cleared_slider_is_inert() {
        let (mut doc, mut slider) = setup(4, PageSliderOptions::standard());
        user_scroll(&mut doc, &mut slider, 500.0);
        assert!(slider.next_deadline().is_some());

        slider.clear(&mut doc).unwrap();
        assert_eq!(slider.next_deadline(), None);

        // Second clear is a no-op, commands are ignored.
        slider.clear(&mut doc).unwrap();
        slider.go_to_slide(&mut doc, 2);
        slider.on_scroll(&mut doc).unwrap();
        slider.on_resize(&mut doc);
        slider.tick(&mut doc).unwrap();
        assert!(doc.scroll_log().is_empty());
    }

    #[test]
    fn test_single_slide() {
        let (mut doc, mut slider) = setup(1, PageSliderOptions::standard());
        let body = doc.body_node();
        assert_eq!(doc.style(&body, "height").as_deref(), Some("800px"));

        slider.next(&mut doc);
        slider.previous(&mut doc);
        assert!(doc.scroll_log().is_empty());

        slider.go_to_slide(&mut doc, 0);
        assert_eq!(doc.scroll_log()[0].top, 0.0);
        assert_eq!(slider.data().current_index, 0);
    }

    #[test]
    fn test_custom_slide_class() {
        let mut doc = HeadlessDocument::new(Viewport::new(1000.0, 800.0));
        let container: NodeId = doc.build_slider_markup(3);
        let panel = doc.append_new(container, "section");
        doc.add_class(&panel, "panel").unwrap();

        let options = PageSliderOptions::standard().with_slide_class("panel");
        let slider = PageSlider::new(&mut doc, container, options).unwrap();
        assert_eq!(slider.slides(), &[panel]);
    }
}
