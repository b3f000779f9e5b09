//! Entrance animations for cards and sections.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use folio_effects_core::{hidden_patch, revealed_patch, EffectsError};

use crate::dom::{self, Observer, Page};

/// Create the reveal observer and, once the DOM is ready, hide and observe
/// every target. Returns `None` when the parsed document has no targets.
pub(crate) fn install(
    page: &Rc<Page>,
    listeners: &mut Vec<EventListener>,
) -> Result<Option<Observer>, EffectsError> {
    if !page.may_match(&page.cfg.selectors.reveal_targets) {
        log::debug!("reveal skipped: no targets");
        return Ok(None);
    }
    let revealed = revealed_patch();
    let observer = Observer::new(
        Some(page.cfg.reveal.threshold),
        Some(page.cfg.reveal.root_margin.as_str()),
        move |target, _| {
            if let Ok(el) = target.dyn_into::<HtmlElement>() {
                dom::apply_patch(&el, &revealed);
            }
        },
    )?;

    let handle = observer.handle();
    let ready_page = Rc::clone(page);
    page.on_dom_ready(listeners, move || {
        let cfg = &ready_page.cfg.reveal;
        let targets = ready_page.query_all(&ready_page.cfg.selectors.reveal_targets);
        log::debug!("reveal: observing {} elements", targets.len());
        for (index, el) in targets.iter().enumerate() {
            dom::apply_patch(el, &hidden_patch(cfg, index));
            handle.observe(el);
        }
    });
    Ok(Some(observer))
}
