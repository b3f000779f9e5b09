//! Optional typewriter effect on the hero name.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use folio_effects_core::Typewriter;

use crate::dom::Page;

pub(crate) fn install(page: &Rc<Page>, listeners: &mut Vec<EventListener>) -> bool {
    if !page.cfg.typewriter.enabled {
        return false;
    }
    if !page.may_match(&page.cfg.selectors.typewriter_target) {
        log::debug!("typewriter skipped: target not found");
        return false;
    }
    let ready_page = Rc::clone(page);
    page.on_dom_ready(listeners, move || {
        let Some(target) = ready_page.query(&ready_page.cfg.selectors.typewriter_target) else {
            log::debug!("typewriter skipped: target not found");
            return;
        };
        let text = target.text_content().unwrap_or_default();
        let speed = ready_page.cfg.typewriter.speed_ms;
        target.set_text_content(Some(""));
        spawn_local(async move {
            for prefix in Typewriter::new(text) {
                target.set_text_content(Some(&prefix));
                TimeoutFuture::new(speed).await;
            }
        });
    });
    true
}
