//! Mobile navigation toggle.

use std::rc::Rc;

use gloo::events::EventListener;

use crate::dom::Page;

/// Wire the hamburger toggle and the menu links. Returns `false` (and binds
/// nothing) when either the toggle or the menu is missing.
pub(crate) fn install(page: &Rc<Page>, listeners: &mut Vec<EventListener>) -> bool {
    let sel = &page.cfg.selectors;
    let (Some(toggle), Some(menu)) = (page.query(&sel.nav_toggle), page.query(&sel.nav_menu))
    else {
        log::debug!("nav toggle skipped: `{}` or `{}` not found", sel.nav_toggle, sel.nav_menu);
        return false;
    };
    let active = page.cfg.markers.active_class.clone();

    {
        let toggle_el = toggle.clone();
        let menu = menu.clone();
        let active = active.clone();
        listeners.push(EventListener::new(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle(&active);
            let _ = toggle_el.class_list().toggle(&active);
        }));
    }

    for link in page.query_all(&sel.nav_links) {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let active = active.clone();
        listeners.push(EventListener::new(&link, "click", move |_| {
            let _ = menu.class_list().remove_1(&active);
            let _ = toggle.class_list().remove_1(&active);
        }));
    }
    true
}
