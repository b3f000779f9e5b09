//! Folio Effects (wasm)
//!
//! `wasm-bindgen` entry points that install the folio site's presentation
//! effects on the current document. The math lives in `folio-effects-core`;
//! this crate reads layout metrics, registers listeners, and applies patches.

use std::cell::RefCell;

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use folio_effects_core::{vanish_opacity, EffectsConfig, EffectsError};

mod anchors;
mod controller;
mod dom;
mod glow;
mod lazy_images;
mod logger;
mod nav;
mod reveal;
mod ripple;
mod scroll;
mod typewriter;
mod vanish;

use controller::Installed;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js_error(err: EffectsError) -> JsError {
    JsError::new(&err.to_string())
}

/// The installed effects. Keep it alive for as long as the effects should
/// run; dropping it (or calling `free()` from JS) detaches everything.
#[wasm_bindgen]
pub struct SiteEffects {
    installed: Installed,
}

#[wasm_bindgen]
impl SiteEffects {
    /// Install all effects. Pass a (partial) config object, or undefined/null
    /// for defaults.
    /// Example:
    ///   new SiteEffects({ timing: { resize_debounce_ms: 150 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SiteEffects, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        logger::init(logger::default_level());

        let cfg: EffectsConfig = if jsvalue_is_undefined_or_null(&config) {
            EffectsConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let installed = Installed::new(cfg).map_err(to_js_error)?;
        Ok(SiteEffects { installed })
    }

    /// Names of the behaviors that found their elements and were activated.
    #[wasm_bindgen(getter)]
    pub fn behaviors(&self) -> js_sys::Array {
        self.installed
            .behaviors()
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    /// Re-run every scroll-driven effect immediately, bypassing throttling.
    /// Returns the applied vanish phase (`{ phase: "reset" }` /
    /// `{ phase: "apply", opacity }`) or `undefined` when the vanish effect is
    /// inactive on this page.
    pub fn refresh(&self) -> Result<JsValue, JsError> {
        match self.installed.refresh() {
            Some(phase) => {
                swb::to_value(&phase).map_err(|e| JsError::new(&format!("phase error: {e}")))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Whether a throttled vanish frame is currently pending.
    #[wasm_bindgen(js_name = framePending)]
    pub fn frame_pending(&self) -> bool {
        self.installed.vanish().is_frame_pending()
    }

    /// Scroll/touch events absorbed by an already pending frame.
    #[wasm_bindgen(js_name = collapsedEvents)]
    pub fn collapsed_events(&self) -> f64 {
        self.installed.vanish().collapsed_events() as f64
    }

    /// Vanish recomputations run so far, from any trigger.
    #[wasm_bindgen(getter)]
    pub fn recomputations(&self) -> f64 {
        self.installed.vanish().recomputations() as f64
    }
}

/// Hero opacity for a scroll offset and viewport width under the default
/// profiles.
#[wasm_bindgen(js_name = vanishOpacityAt)]
pub fn vanish_opacity_at(scroll_y: f64, viewport_width: f64) -> f64 {
    let cfg = EffectsConfig::default();
    vanish_opacity(scroll_y, cfg.vanish.profile_for(viewport_width))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

thread_local! {
    static AUTOSTARTED: RefCell<Option<SiteEffects>> = const { RefCell::new(None) };
}

/// Install default effects for the page lifetime.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let effects = SiteEffects::new(JsValue::UNDEFINED).map_err(JsValue::from)?;
    AUTOSTARTED.with(|slot| *slot.borrow_mut() = Some(effects));
    Ok(())
}

/// Whether the module's start function installed a controller.
#[wasm_bindgen(js_name = isAutostarted)]
pub fn is_autostarted() -> bool {
    AUTOSTARTED.with(|slot| slot.borrow().is_some())
}
