//! Smooth scrolling for in-page anchors.

use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use folio_effects_core::fragment_selector;

use crate::dom::{self, Page};

/// Intercept every in-page anchor. Returns how many anchors were bound.
pub(crate) fn install(page: &Rc<Page>, listeners: &mut Vec<EventListener>) -> usize {
    let anchors = page.query_all(&page.cfg.selectors.anchors);
    for anchor in &anchors {
        let page = Rc::clone(page);
        let link = anchor.clone();
        listeners.push(EventListener::new_with_options(
            anchor,
            "click",
            dom::cancelable(),
            move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                if let Some(target) = fragment_selector(&href).and_then(|s| page.query(s)) {
                    scroll_to_top_edge(&target);
                }
            },
        ));
    }
    anchors.len()
}

fn scroll_to_top_edge(target: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
