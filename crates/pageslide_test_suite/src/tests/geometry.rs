//! Page sizing and scroll-to-indent mapping

use anyhow::ensure;
use pageslide::{Host, PageSliderOptions};

use crate::runner::TestSuite;

/// Create the geometry suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("geometry");

    // 5 slides at 1000x800: page is 5 viewports tall, row is 5 viewports wide
    suite.add("page_sizing", |ctx| {
        let container = ctx.mount(5, PageSliderOptions::standard())?;
        let doc = ctx.doc();
        let body = doc.body_node();

        ensure!(doc.style(&body, "height").as_deref() == Some("4000px"));
        ensure!(doc.style(&body, "overflow-x").as_deref() == Some("hidden"));
        ensure!(doc.style(&container, "width").as_deref() == Some("5000px"));
        ensure!(doc.style(&container, "display").as_deref() == Some("flex"));

        let geometry = ctx.slider()?.geometry(doc);
        ensure!(geometry.total_length() == 4000.0);
        ensure!(geometry.scroll_range() == 3200.0);
        Ok(())
    });

    suite.add("scroll_maps_to_slide", |ctx| {
        ctx.mount(5, PageSliderOptions::standard())?;
        ctx.user_scroll(1000.0)?;

        let slider = ctx.slider()?;
        ensure!(slider.data().current_index == 1);
        ensure!(slider.data().left_indent == 1250.0);
        ensure!(
            ctx.doc().style(slider.wrapper(), "left").as_deref() == Some("-1250px"),
            "wrapper not shifted"
        );
        Ok(())
    });

    // Doubling the multiplier doubles the page and halves the travel per pixel
    suite.add("multiplier_slows_travel", |ctx| {
        ctx.mount(5, PageSliderOptions::standard().with_multiplier(2.0))?;
        let body = ctx.doc().body_node();
        ensure!(ctx.doc().style(&body, "height").as_deref() == Some("8000px"));

        let target = ctx.slider()?.geometry(ctx.doc()).scroll_for_slide(2);
        ensure!(target == 3600.0, "slide 2 at {}", target);

        ctx.user_scroll(target)?;
        ensure!(ctx.current_index()? == 2);
        Ok(())
    });

    suite.add("page_end_reaches_last_slide", |ctx| {
        ctx.mount(5, PageSliderOptions::static_snap())?;
        ctx.user_scroll(1.0e9)?;

        ensure!(ctx.doc().scroll_y() == 3200.0);
        let data = ctx.slider()?.data();
        ensure!(data.current_index == 4);
        ensure!(data.left_indent == 4000.0);
        ensure!(data.is_last());
        Ok(())
    });

    suite
}
