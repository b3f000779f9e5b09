//! Deferred image loading.

use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use folio_effects_core::EffectsError;

use crate::dom::{Observer, Page};

/// Whether the window exposes `IntersectionObserver`.
pub(crate) fn supported(page: &Page) -> bool {
    Reflect::has(&page.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observe every image carrying the deferred-source attribute and swap it in
/// the first time the image becomes visible. Returns `None` when the browser
/// lacks `IntersectionObserver` or the page has no deferred images.
pub(crate) fn install(page: &Rc<Page>) -> Result<Option<Observer>, EffectsError> {
    if !supported(page) {
        log::debug!("lazy images skipped: IntersectionObserver unavailable");
        return Ok(None);
    }
    let images = page.query_all(&page.cfg.selectors.lazy_images);
    if images.is_empty() {
        return Ok(None);
    }
    let attr = page.cfg.markers.deferred_src_attr.clone();
    let observer = Observer::new(None, None, move |img, observer| {
        if let Some(src) = img.get_attribute(&attr).filter(|s| !s.is_empty()) {
            let _ = img.set_attribute("src", &src);
            let _ = img.remove_attribute(&attr);
        }
        observer.unobserve(&img);
    })?;
    for img in &images {
        observer.observe(img);
    }
    log::debug!("lazy images: observing {}", images.len());
    Ok(Some(observer))
}
