//! Entrance animation styles for cards and sections.

use crate::config::RevealConfig;
use crate::style::{css_number, translate_y, ElementPatch, StyleProp};

/// Transition delay for the element at `index` in the matched set.
#[inline]
pub fn stagger_delay_s(cfg: &RevealConfig, index: usize) -> f64 {
    index as f64 * cfg.stagger_s
}

/// Starting state: transparent, shifted down, with a staggered transition.
pub fn hidden_patch(cfg: &RevealConfig, index: usize) -> ElementPatch {
    let duration = css_number(cfg.duration_s);
    let delay = css_number(stagger_delay_s(cfg, index));
    ElementPatch::new()
        .set(StyleProp::Opacity, "0")
        .set(StyleProp::Transform, translate_y(cfg.offset_px))
        .set(
            StyleProp::Transition,
            format!(
                "opacity {duration}s ease {delay}s, transform {duration}s ease {delay}s"
            ),
        )
}

/// Final state once the element has been seen.
pub fn revealed_patch() -> ElementPatch {
    ElementPatch::new()
        .set(StyleProp::Opacity, "1")
        .set(StyleProp::Transform, translate_y(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_element_has_no_delay() {
        let patch = hidden_patch(&RevealConfig::default(), 0);
        assert_eq!(
            patch.get(StyleProp::Transition),
            Some("opacity 0.6s ease 0s, transform 0.6s ease 0s")
        );
        assert_eq!(patch.get(StyleProp::Transform), Some("translateY(20px)"));
    }
}
