//! Ripple geometry for click feedback on buttons.

use serde::{Deserialize, Serialize};

use crate::style::{px, ElementPatch, StyleProp};

/// Stylesheet injected once so ripples grow and fade out.
pub const RIPPLE_CSS: &str = r#"
    .btn {
        position: relative;
        overflow: hidden;
    }
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        pointer-events: none;
    }
    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
"#;

/// A bounding client rect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square ripple placed relative to its button.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Ripple for a click at (`client_x`, `client_y`) on a button occupying
    /// `rect`: as large as the button's longer side, centered on the click.
    pub fn from_click(rect: ClientRect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    /// Center of the ripple in client coordinates.
    pub fn center(&self, rect: ClientRect) -> (f64, f64) {
        (
            rect.left + self.left + self.size / 2.0,
            rect.top + self.top + self.size / 2.0,
        )
    }

    pub fn patch(&self, class: &str) -> ElementPatch {
        ElementPatch::new()
            .set(StyleProp::Width, px(self.size))
            .set(StyleProp::Height, px(self.size))
            .set(StyleProp::Left, px(self.left))
            .set(StyleProp::Top, px(self.top))
            .add_class(class)
    }
}
