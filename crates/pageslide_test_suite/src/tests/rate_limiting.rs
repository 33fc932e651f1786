//! Throttle and debounce, alone and inside a slider

use std::time::Duration;

use anyhow::ensure;
use pageslide::{Host, PageSliderOptions, SliderEvent, Viewport};
use pageslide_core::{Debounce, Throttle};

use crate::runner::TestSuite;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Create the rate limiting suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("rate_limiting");

    suite.add("throttle_at_most_two_runs", |_| {
        let mut gate = Throttle::from_millis(200);
        let mut runs = 0;
        for t in (0..200).step_by(10) {
            if gate.call(ms(t)) {
                runs += 1;
            }
        }
        for t in (200..600).step_by(5) {
            if gate.poll(ms(t)) {
                runs += 1;
            }
        }
        ensure!(runs == 2, "{} runs", runs);
        Ok(())
    });

    suite.add("debounce_runs_once_after_last_call", |_| {
        let mut gate = Debounce::from_millis(200);
        let mut runs = Vec::new();
        for t in (0..800).step_by(5) {
            if t < 200 && t % 10 == 0 {
                gate.call(ms(t));
            }
            if gate.poll(ms(t)) {
                runs.push(t);
            }
        }
        ensure!(runs == vec![390], "runs at {:?}", runs);
        Ok(())
    });

    // A burst of scroll notifications inside one window updates twice
    suite.add("scroll_burst_is_throttled", |ctx| {
        ctx.mount(5, PageSliderOptions::static_snap().with_scroll_throttle(200))?;
        let events = ctx.record_events()?;

        for i in 0..20 {
            ctx.user_scroll(100.0 + i as f64 * 20.0)?;
            ctx.run_for(ms(5))?;
        }
        ctx.run_for(ms(300))?;

        let updates = events
            .borrow()
            .iter()
            .filter(|event| matches!(event, SliderEvent::Updated(_)))
            .count();
        ensure!(updates == 2, "{} updates", updates);

        // The trailing run saw the final position.
        let indent = ctx.slider()?.data().left_indent;
        ensure!(indent == 4000.0 * 480.0 / 3200.0, "indent {}", indent);
        Ok(())
    });

    // Only the last size of a resize burst is drawn, after the quiet period
    suite.add("resize_burst_is_debounced", |ctx| {
        ctx.mount(5, PageSliderOptions::standard())?;
        let body = ctx.doc().body_node();

        ctx.resize(Viewport::new(900.0, 700.0))?;
        ctx.run_for(ms(20))?;
        ctx.resize(Viewport::new(1100.0, 600.0))?;
        ctx.run_for(ms(20))?;
        ctx.resize(Viewport::new(1200.0, 500.0))?;
        ctx.run_for(ms(150))?;
        ensure!(ctx.doc().style(&body, "height").as_deref() == Some("4000px"));

        ctx.run_for(ms(100))?;
        ensure!(ctx.doc().style(&body, "height").as_deref() == Some("2500px"));
        let container = ctx.slider()?.container();
        ensure!(ctx.doc().style(container, "width").as_deref() == Some("6000px"));
        Ok(())
    });

    suite
}
