//! Click ripples on buttons.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, MouseEvent};

use folio_effects_core::{RippleGeometry, RIPPLE_CSS};

use crate::dom::{self, Page};

const STYLE_ID: &str = "folio-ripple-styles";

/// Add the ripple stylesheet to `<head>` unless it is already there.
pub(crate) fn inject_styles(page: &Page) -> bool {
    let document = &page.document;
    if document.get_element_by_id(STYLE_ID).is_some() {
        return false;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return false;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(RIPPLE_CSS));
    head.append_child(&style).is_ok()
}

pub(crate) fn install(page: &Rc<Page>, listeners: &mut Vec<EventListener>) -> usize {
    let buttons = page.query_all(&page.cfg.selectors.ripple_buttons);
    for button in &buttons {
        let page = Rc::clone(page);
        let el = button.clone();
        listeners.push(EventListener::new(button, "click", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            spawn_ripple(&page, &el, event.client_x() as f64, event.client_y() as f64);
        }));
    }
    buttons.len()
}

/// Append a ripple to `button` centered on the click and schedule its
/// removal. Each ripple has its own timer.
pub(crate) fn spawn_ripple(
    page: &Page,
    button: &HtmlElement,
    client_x: f64,
    client_y: f64,
) -> Option<HtmlElement> {
    let geometry = RippleGeometry::from_click(dom::client_rect(button), client_x, client_y);
    let ripple = page
        .document
        .create_element("span")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    dom::apply_patch(&ripple, &geometry.patch(&page.cfg.markers.ripple_class));
    button.append_child(&ripple).ok()?;

    let lifetime = page.cfg.ripple.lifetime_ms;
    let doomed = ripple.clone();
    spawn_local(async move {
        TimeoutFuture::new(lifetime).await;
        doomed.remove();
    });
    Some(ripple)
}
