//! Unthrottled scroll reactions: hero parallax and nav link highlighting.

use std::rc::Rc;

use gloo::events::EventListener;

use folio_effects_core::{active_section, link_selector, parallax_patch, SectionMetrics};

use crate::dom::{self, Page};

pub(crate) fn install_parallax(page: &Rc<Page>, listeners: &mut Vec<EventListener>) {
    let page = Rc::clone(page);
    let window = page.window.clone();
    listeners.push(EventListener::new(&window, "scroll", move |_| {
        apply_parallax(&page);
    }));
}

pub(crate) fn apply_parallax(page: &Page) {
    if let Some(hero) = page.query(&page.cfg.selectors.hero) {
        dom::apply_patch(&hero, &parallax_patch(&page.cfg.parallax, page.scroll_y()));
    }
}

pub(crate) fn install_active_links(page: &Rc<Page>, listeners: &mut Vec<EventListener>) {
    let page = Rc::clone(page);
    let window = page.window.clone();
    listeners.push(EventListener::new(&window, "scroll", move |_| {
        highlight_active_link(&page);
    }));
}

/// Mark the nav link of the section containing the current scroll offset.
/// Leaves every marker untouched when no linked section matches.
pub(crate) fn highlight_active_link(page: &Page) {
    let sel = &page.cfg.selectors;
    let sections: Vec<SectionMetrics> = page
        .query_all(&sel.sections)
        .iter()
        .filter_map(|section| {
            let id = section.get_attribute("id")?;
            Some(SectionMetrics::new(
                id,
                section.offset_top() as f64,
                section.offset_height() as f64,
            ))
        })
        .collect();

    let scroll_y = page.scroll_y();
    let has_link = |id: &str| page.query(&link_selector(&sel.nav_links, id)).is_some();
    let Some(id) = active_section(&sections, scroll_y, page.cfg.active_link.offset_px, has_link)
    else {
        return;
    };
    let Some(link) = page.query(&link_selector(&sel.nav_links, id)) else {
        return;
    };

    let active = &page.cfg.markers.active_class;
    for other in page.query_all(&sel.nav_links) {
        let _ = other.class_list().remove_1(active);
    }
    let _ = link.class_list().add_1(active);
}
