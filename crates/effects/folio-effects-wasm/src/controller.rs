//! Installs every effect on a page and owns what keeps them alive.

use std::rc::Rc;

use gloo::events::EventListener;

use folio_effects_core::{EffectsConfig, EffectsError, VanishPhase};

use crate::dom::{Observer, Page};
use crate::{anchors, glow, lazy_images, nav, reveal, ripple, scroll, typewriter};

/// Everything registered on the page. Dropping it removes all listeners and
/// disconnects all observers.
pub(crate) struct Installed {
    page: Rc<Page>,
    vanish: Rc<crate::vanish::HeroVanish>,
    behaviors: Vec<&'static str>,
    _listeners: Vec<EventListener>,
    _observers: Vec<Observer>,
}

impl Installed {
    pub fn new(cfg: EffectsConfig) -> Result<Self, EffectsError> {
        cfg.validate()?;
        let page = Page::new(cfg)?;
        let mut listeners = Vec::new();
        let mut observers = Vec::new();
        let mut behaviors = Vec::new();

        if nav::install(&page, &mut listeners) {
            behaviors.push("nav-toggle");
        }
        if anchors::install(&page, &mut listeners) > 0 {
            behaviors.push("smooth-anchors");
        }
        if let Some(observer) = reveal::install(&page, &mut listeners)? {
            observers.push(observer);
            behaviors.push("reveal");
        }
        if glow::install(&page, &mut listeners) > 0 {
            behaviors.push("hover-glow");
        }

        // scroll reactions re-query their elements per event, so they are
        // bound regardless and only reported when the elements exist
        let has_hero = page.may_match(&page.cfg.selectors.hero);
        scroll::install_parallax(&page, &mut listeners);
        let vanish = crate::vanish::HeroVanish::new(Rc::clone(&page));
        vanish.install(&mut listeners);
        if has_hero {
            behaviors.push("parallax");
            behaviors.push("hero-vanish");
        }

        scroll::install_active_links(&page, &mut listeners);
        if page.may_match(&page.cfg.selectors.sections) {
            behaviors.push("active-links");
        }

        if let Some(observer) = lazy_images::install(&page)? {
            observers.push(observer);
            behaviors.push("lazy-images");
        }
        if ripple::install(&page, &mut listeners) > 0 {
            behaviors.push("ripple");
        }
        if page.cfg.ripple.inject_styles {
            ripple::inject_styles(&page);
        }
        if typewriter::install(&page, &mut listeners) {
            behaviors.push("typewriter");
        }

        log::info!(
            "folio effects installed: {} ({} listeners)",
            behaviors.join(", "),
            listeners.len()
        );

        Ok(Self {
            page,
            vanish,
            behaviors,
            _listeners: listeners,
            _observers: observers,
        })
    }

    pub fn behaviors(&self) -> &[&'static str] {
        &self.behaviors
    }

    pub fn refresh(&self) -> Option<VanishPhase> {
        scroll::apply_parallax(&self.page);
        scroll::highlight_active_link(&self.page);
        self.vanish.recompute()
    }

    pub fn vanish(&self) -> &crate::vanish::HeroVanish {
        &self.vanish
    }
}

impl Drop for Installed {
    fn drop(&mut self) {
        self.vanish.cancel_pending();
    }
}
