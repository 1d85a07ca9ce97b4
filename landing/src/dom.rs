//! Small DOM helpers shared by sections.

use leptos::prelude::*;
use tracing::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Stop the page body from scrolling behind an overlay, or restore it.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let overflow = if locked { "hidden" } else { "auto" };
    if let Err(err) = body.style().set_property("overflow", overflow) {
        warn!(?err, "could not set body overflow");
    }
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_anchor(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        warn!(id, "scroll target missing");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}
