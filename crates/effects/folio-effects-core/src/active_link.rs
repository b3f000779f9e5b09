//! Active-link selection: which section the scroll offset currently sits in.

use serde::{Deserialize, Serialize};

/// Layout box of one `section[id]`, in document px.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionMetrics {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `scroll_y` falls in `(top - offset, top - offset + height]`.
    #[inline]
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y > start && scroll_y <= start + self.height
    }
}

/// Id of the section whose link should be marked active, if any.
///
/// Sections are visited in document order and only those for which
/// `has_link(id)` holds take part. When ranges touch, the later section wins.
pub fn active_section<'a, F>(
    sections: &'a [SectionMetrics],
    scroll_y: f64,
    offset: f64,
    mut has_link: F,
) -> Option<&'a str>
where
    F: FnMut(&str) -> bool,
{
    let mut active = None;
    for section in sections {
        if section.contains(scroll_y, offset) && has_link(&section.id) {
            active = Some(section.id.as_str());
        }
    }
    active
}

/// `href` value a nav link must carry to point at section `id`.
pub fn fragment_href(id: &str) -> String {
    format!("#{id}")
}

/// Selector for the nav link targeting section `id`, scoped under `links`
/// (for example `.nav-menu a`).
pub fn link_selector(links: &str, id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{links}[href=\"#{escaped}\"]")
}
