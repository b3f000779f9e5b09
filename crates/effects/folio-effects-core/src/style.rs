//! Style patches: the presentation writes computed by the core and applied by
//! an adapter (the wasm crate) to live elements.

use serde::{Deserialize, Serialize};

/// CSS properties written by the effects.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProp {
    Opacity,
    Visibility,
    PointerEvents,
    Transform,
    Transition,
    BoxShadow,
    Width,
    Height,
    Left,
    Top,
}

impl StyleProp {
    /// CSS property name as accepted by `CSSStyleDeclaration.setProperty`.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Opacity => "opacity",
            StyleProp::Visibility => "visibility",
            StyleProp::PointerEvents => "pointer-events",
            StyleProp::Transform => "transform",
            StyleProp::Transition => "transition",
            StyleProp::BoxShadow => "box-shadow",
            StyleProp::Width => "width",
            StyleProp::Height => "height",
            StyleProp::Left => "left",
            StyleProp::Top => "top",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_css(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvents {
    Auto,
    None,
}

impl PointerEvents {
    pub fn as_css(self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
        }
    }
}

/// A single `property: value` assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleWrite {
    pub prop: StyleProp,
    pub value: String,
}

/// Add or remove a class marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "class", rename_all = "lowercase")]
pub enum ClassChange {
    Add(String),
    Remove(String),
}

/// Ordered style and class writes for one element.
///
/// Every write is an absolute assignment, so applying a patch twice leaves the
/// element in the same state as applying it once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    pub styles: Vec<StyleWrite>,
    pub classes: Vec<ClassChange>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(mut self, prop: StyleProp, value: impl Into<String>) -> Self {
        self.styles.push(StyleWrite {
            prop,
            value: value.into(),
        });
        self
    }

    #[inline]
    pub fn add_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(ClassChange::Add(class.into()));
        self
    }

    #[inline]
    pub fn remove_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(ClassChange::Remove(class.into()));
        self
    }

    /// Last value written for `prop`, if any.
    pub fn get(&self, prop: StyleProp) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|w| w.prop == prop)
            .map(|w| w.value.as_str())
    }

    /// Numeric view of the last value written for `prop`.
    pub fn get_f64(&self, prop: StyleProp) -> Option<f64> {
        self.get(prop).and_then(|v| v.trim().parse::<f64>().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.classes.is_empty()
    }
}

/// Format a number the way the browser serializes it into inline styles:
/// integral values without a fractional part, everything else in shortest form.
pub fn css_number(v: f64) -> String {
    if v == 0.0 {
        // normalizes -0
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// `{v}px`
pub fn px(v: f64) -> String {
    format!("{}px", css_number(v))
}

pub fn translate_y(offset_px: f64) -> String {
    format!("translateY({})", px(offset_px))
}

pub fn scale(factor: f64) -> String {
    format!("scale({})", css_number(factor))
}
