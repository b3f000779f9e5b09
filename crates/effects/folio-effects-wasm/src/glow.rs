//! Hover glow on primary buttons.

use std::rc::Rc;

use gloo::events::EventListener;

use folio_effects_core::{glow_patch, Hover};

use crate::dom::{self, Page};

pub(crate) fn install(page: &Rc<Page>, listeners: &mut Vec<EventListener>) -> usize {
    let buttons = page.query_all(&page.cfg.selectors.glow_buttons);
    let enter = Rc::new(glow_patch(&page.cfg.glow, Hover::Enter));
    let leave = Rc::new(glow_patch(&page.cfg.glow, Hover::Leave));
    for button in &buttons {
        for (event, patch) in [("mouseenter", &enter), ("mouseleave", &leave)] {
            let el = button.clone();
            let patch = Rc::clone(patch);
            listeners.push(EventListener::new(button, event, move |_| {
                dom::apply_patch(&el, &patch);
            }));
        }
    }
    buttons.len()
}
