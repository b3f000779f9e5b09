//! In-page anchor resolution.

/// Selector for the element an in-page `href` points at.
///
/// Returns `None` for anything that is not a non-empty fragment (`"#"`,
/// `""`, external URLs), which the caller treats like a missing target.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let trimmed = href.trim();
    let id = trimmed.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(trimmed)
}
