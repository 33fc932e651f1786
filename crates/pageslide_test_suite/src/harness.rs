//! Scenario harness
//!
//! [`SliderHarness`] owns a headless page and the slider mounted on it, and
//! plays the browser's part: it forwards scroll and resize notifications,
//! fires timers when their deadline passes and moves the clock in small
//! steps so smooth scrolls animate.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use pageslide::{
    Host, HostEvent, PageSlider, PageSliderOptions, SliderEvent, SliderEventKind, Viewport,
};
use pageslide_platform_headless::{HeadlessDocument, NodeId};

/// Result of a test
#[derive(Clone, Debug, PartialEq)]
pub enum TestResult {
    /// Test passed
    Passed,
    /// Test returned an error or panicked
    Failed { reason: String },
    /// Test could not run
    Skipped { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed)
    }
}

/// Notifications captured by [`SliderHarness::record_events`]
pub type EventLog = Rc<RefCell<Vec<SliderEvent<NodeId>>>>;

/// A page, the slider mounted on it, and a simulated browser loop
pub struct SliderHarness {
    name: String,
    step: Duration,
    doc: HeadlessDocument,
    slider: Option<PageSlider<HeadlessDocument>>,
}

impl SliderHarness {
    /// Create an empty page
    pub fn new(name: &str, viewport: Viewport, step: Duration) -> Self {
        Self {
            name: name.to_string(),
            step,
            doc: HeadlessDocument::new(viewport),
            slider: None,
        }
    }

    /// Scenario name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build slider markup with `slides` slides and mount a slider on it
    pub fn mount(&mut self, slides: usize, options: PageSliderOptions) -> Result<NodeId> {
        let container = self.doc.build_slider_markup(slides);
        self.mount_on(container, options)?;
        Ok(container)
    }

    /// Mount a slider on an existing container
    pub fn mount_on(&mut self, container: NodeId, options: PageSliderOptions) -> Result<()> {
        let slider = PageSlider::new(&mut self.doc, container, options)
            .with_context(|| format!("{}: mounting slider", self.name))?;
        self.slider = Some(slider);
        Ok(())
    }

    pub fn doc(&self) -> &HeadlessDocument {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut HeadlessDocument {
        &mut self.doc
    }

    /// The mounted slider
    pub fn slider(&self) -> Result<&PageSlider<HeadlessDocument>> {
        self.slider
            .as_ref()
            .ok_or_else(|| anyhow!("{}: no slider mounted", self.name))
    }

    pub fn slider_mut(&mut self) -> Result<&mut PageSlider<HeadlessDocument>> {
        let (_, slider) = self.parts()?;
        Ok(slider)
    }

    fn parts(&mut self) -> Result<(&mut HeadlessDocument, &mut PageSlider<HeadlessDocument>)> {
        let slider = self
            .slider
            .as_mut()
            .ok_or_else(|| anyhow!("{}: no slider mounted", self.name))?;
        Ok((&mut self.doc, slider))
    }

    /// Capture every notification the slider fires from now on
    pub fn record_events(&mut self) -> Result<EventLog> {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let (_, slider) = self.parts()?;
        for kind in [SliderEventKind::Updated, SliderEventKind::SlideChanged] {
            let sink = Rc::clone(&log);
            slider.subscribe(kind, move |event| sink.borrow_mut().push(event.clone()));
        }
        Ok(log)
    }

    // ========================================================================
    // Driving the page
    // ========================================================================

    /// Scroll as the user would and deliver the notification
    pub fn user_scroll(&mut self, y: f64) -> Result<()> {
        self.doc.user_scroll_to(y);
        self.dispatch()
    }

    /// Resize the viewport and deliver the notification
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        self.doc.resize(viewport);
        self.dispatch()
    }

    /// Advance the clock by `span`, delivering notifications and timers
    pub fn run_for(&mut self, span: Duration) -> Result<()> {
        let end = self.doc.now() + span;
        while self.doc.now() < end {
            self.doc.advance(self.step);
            self.dispatch()?;
        }
        Ok(())
    }

    /// Run until no smooth scroll is in flight and no timer is armed
    ///
    /// Fails if the page is still moving after `limit`.
    pub fn settle(&mut self, limit: Duration) -> Result<()> {
        let start = self.doc.now();
        loop {
            let idle = !self.doc.is_scrolling() && self.slider()?.next_deadline().is_none();
            if idle {
                return Ok(());
            }
            if self.doc.now() - start >= limit {
                return Err(anyhow!(
                    "{}: still moving after {:?} (scroll_y = {})",
                    self.name,
                    limit,
                    self.doc.scroll_y()
                ));
            }
            self.doc.advance(self.step);
            self.dispatch()?;
        }
    }

    fn dispatch(&mut self) -> Result<()> {
        let (doc, slider) = self.parts()?;
        if doc.take_pending(HostEvent::Scroll) {
            slider.on_scroll(doc)?;
        }
        if doc.take_pending(HostEvent::Resize) {
            slider.on_resize(doc);
        }
        slider.tick(doc)?;
        Ok(())
    }

    // ========================================================================
    // Slider commands
    // ========================================================================

    pub fn go_to_slide(&mut self, index: isize) -> Result<()> {
        let (doc, slider) = self.parts()?;
        slider.go_to_slide(doc, index);
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        let (doc, slider) = self.parts()?;
        slider.next(doc);
        Ok(())
    }

    pub fn previous(&mut self) -> Result<()> {
        let (doc, slider) = self.parts()?;
        slider.previous(doc);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        let (doc, slider) = self.parts()?;
        slider.clear(doc)?;
        Ok(())
    }

    /// Index of the nearest slide
    pub fn current_index(&self) -> Result<isize> {
        Ok(self.slider()?.data().current_index)
    }
}

/// Configuration for [`TestHarness`]
#[derive(Clone, Debug)]
pub struct TestHarnessConfig {
    /// Viewport every scenario starts with
    pub viewport: Viewport,
    /// Clock step of the simulated browser loop
    pub step: Duration,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1000.0, 800.0),
            step: Duration::from_millis(5),
        }
    }
}

/// Creates a fresh [`SliderHarness`] per scenario and runs it
#[derive(Clone, Debug, Default)]
pub struct TestHarness {
    config: TestHarnessConfig,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TestHarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TestHarnessConfig {
        &self.config
    }

    /// Fresh page for a scenario
    pub fn create_context(&self, name: &str) -> SliderHarness {
        SliderHarness::new(name, self.config.viewport, self.config.step)
    }

    /// Run a scenario, turning errors and panics into [`TestResult::Failed`]
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> TestResult
    where
        F: FnOnce(&mut SliderHarness) -> Result<()>,
    {
        let mut ctx = self.create_context(name);
        match panic::catch_unwind(AssertUnwindSafe(|| test_fn(&mut ctx))) {
            Ok(Ok(())) => TestResult::Passed,
            Ok(Err(e)) => TestResult::Failed {
                reason: format!("{:#}", e),
            },
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panicked".to_string());
                TestResult::Failed { reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_test_reports_errors_and_panics() {
        let harness = TestHarness::new();
        assert!(harness.run_test("ok", |_| Ok(())).is_passed());

        let failed = harness.run_test("err", |ctx| ctx.next());
        assert!(matches!(failed, TestResult::Failed { reason } if reason.contains("no slider")));

        let panicked = harness.run_test("panic", |_| panic!("boom"));
        assert_eq!(
            panicked,
            TestResult::Failed {
                reason: "boom".into()
            }
        );
    }

    #[test]
    fn test_settle_waits_for_animation_and_timers() {
        let harness = TestHarness::new();
        let mut ctx = harness.create_context("settle");
        ctx.mount(5, PageSliderOptions::standard()).unwrap();

        ctx.go_to_slide(3).unwrap();
        ctx.settle(Duration::from_secs(5)).unwrap();

        assert_eq!(ctx.current_index().unwrap(), 3);
        assert!(!ctx.doc().is_scrolling());
    }
}
