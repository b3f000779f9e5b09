//! Document access shared by the effect modules.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use folio_effects_core::{
    ClassChange, ClientRect, EffectsConfig, EffectsError, ElementPatch, Viewport,
};

/// Window, document and configuration handed to every effect.
pub(crate) struct Page {
    pub window: Window,
    pub document: Document,
    pub cfg: EffectsConfig,
}

impl Page {
    pub fn new(cfg: EffectsConfig) -> Result<Rc<Self>, EffectsError> {
        let window = web_sys::window().ok_or(EffectsError::MissingWindow)?;
        let document = window.document().ok_or(EffectsError::MissingDocument)?;
        Ok(Rc::new(Self {
            window,
            document,
            cfg,
        }))
    }

    /// First element matching `selector`. Invalid selectors match nothing.
    pub fn query(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    pub fn scroll_y(&self) -> f64 {
        let y = self.window.scroll_y().unwrap_or(0.0);
        if y > 0.0 {
            return y;
        }
        self.document
            .document_element()
            .map(|root| root.scroll_top() as f64)
            .unwrap_or(0.0)
    }

    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_y(), self.viewport_width())
    }

    pub fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    /// Whether the document is still being parsed.
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// Whether `selector` matches something now, or may still match once
    /// parsing finishes.
    pub fn may_match(&self, selector: &str) -> bool {
        self.is_loading() || self.query(selector).is_some()
    }

    /// Run `f` once the DOM is parsed: right away if it already is, otherwise
    /// on `DOMContentLoaded`.
    pub fn on_dom_ready<F>(&self, listeners: &mut Vec<EventListener>, f: F)
    where
        F: FnOnce() + 'static,
    {
        if self.is_loading() {
            listeners.push(EventListener::once(
                &self.document,
                "DOMContentLoaded",
                move |_| f(),
            ));
        } else {
            f();
        }
    }
}

/// Options for listeners on scroll-like events that never cancel them.
pub(crate) fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

/// Options for listeners that call `prevent_default`.
pub(crate) fn cancelable() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

/// Write a patch onto `el`. Individual failed writes are ignored, as an
/// inline style assignment would ignore them.
pub(crate) fn apply_patch(el: &HtmlElement, patch: &ElementPatch) {
    let style = el.style();
    for write in &patch.styles {
        let _ = style.set_property(write.prop.css_name(), &write.value);
    }
    let classes = el.class_list();
    for change in &patch.classes {
        let _ = match change {
            ClassChange::Add(name) => classes.add_1(name),
            ClassChange::Remove(name) => classes.remove_1(name),
        };
    }
}

pub(crate) fn client_rect(el: &Element) -> ClientRect {
    let rect = el.get_bounding_client_rect();
    ClientRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// An `IntersectionObserver` with its callback. Dropping it disconnects the
/// observer.
pub(crate) struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Observer calling `on_visible(target, observer)` for every entry that
    /// starts intersecting. `threshold`/`root_margin` of `None` keep the
    /// browser defaults.
    pub fn new<F>(
        threshold: Option<f64>,
        root_margin: Option<&str>,
        mut on_visible: F,
    ) -> Result<Self, EffectsError>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| EffectsError::dom(format!("IntersectionObserver: {e:?}")))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }

    pub fn handle(&self) -> IntersectionObserver {
        self.observer.clone()
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
