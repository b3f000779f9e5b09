//! Small stateless effects: hero parallax and the primary-button glow.

use crate::config::{GlowConfig, ParallaxConfig};
use crate::style::{translate_y, ElementPatch, StyleProp};

/// Hero offset for the current scroll position.
#[inline]
pub fn parallax_offset(cfg: &ParallaxConfig, scroll_y: f64) -> f64 {
    scroll_y * cfg.factor
}

pub fn parallax_patch(cfg: &ParallaxConfig, scroll_y: f64) -> ElementPatch {
    ElementPatch::new().set(
        StyleProp::Transform,
        translate_y(parallax_offset(cfg, scroll_y)),
    )
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Hover {
    Enter,
    Leave,
}

pub fn glow_patch(cfg: &GlowConfig, hover: Hover) -> ElementPatch {
    let shadow = match hover {
        Hover::Enter => cfg.hover_shadow.as_str(),
        Hover::Leave => cfg.rest_shadow.as_str(),
    };
    ElementPatch::new().set(StyleProp::BoxShadow, shadow)
}
