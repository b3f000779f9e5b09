//! Configuration for the site effects.
//!
//! Every selector, threshold and timing the effects use lives here. Each
//! section is `#[serde(default)]`, so a partial JSON object overrides only the
//! fields it names.

use serde::{Deserialize, Serialize};

use crate::error::EffectsError;
use crate::vanish::VanishProfile;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub selectors: Selectors,
    pub markers: Markers,
    pub vanish: VanishConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub glow: GlowConfig,
    pub active_link: ActiveLinkConfig,
    pub timing: TimingConfig,
    pub ripple: RippleConfig,
    pub typewriter: TypewriterConfig,
}

/// Element selectors the page is expected to provide. Any of them may match
/// nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub anchors: String,
    pub reveal_targets: String,
    pub glow_buttons: String,
    pub hero: String,
    pub profile_image: String,
    pub profile_glow: String,
    pub social_icons: String,
    pub hero_text: String,
    pub hero_buttons: String,
    pub sections: String,
    pub lazy_images: String,
    pub ripple_buttons: String,
    pub typewriter_target: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".hamburger".into(),
            nav_menu: ".nav-menu".into(),
            nav_links: ".nav-menu a".into(),
            anchors: "a[href^=\"#\"]".into(),
            reveal_targets: ".glass-card, .link-card, .project-card, .about-section".into(),
            glow_buttons: ".btn-primary".into(),
            hero: ".hero".into(),
            profile_image: ".profile-image".into(),
            profile_glow: ".profile-glow".into(),
            social_icons: ".social-icons".into(),
            hero_text: ".hero-text".into(),
            hero_buttons: ".hero-buttons".into(),
            sections: "section[id]".into(),
            lazy_images: "img[data-src]".into(),
            ripple_buttons: ".btn".into(),
            typewriter_target: ".name".into(),
        }
    }
}

impl Selectors {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("nav_toggle", self.nav_toggle.as_str()),
            ("nav_menu", self.nav_menu.as_str()),
            ("nav_links", self.nav_links.as_str()),
            ("anchors", self.anchors.as_str()),
            ("reveal_targets", self.reveal_targets.as_str()),
            ("glow_buttons", self.glow_buttons.as_str()),
            ("hero", self.hero.as_str()),
            ("profile_image", self.profile_image.as_str()),
            ("profile_glow", self.profile_glow.as_str()),
            ("social_icons", self.social_icons.as_str()),
            ("hero_text", self.hero_text.as_str()),
            ("hero_buttons", self.hero_buttons.as_str()),
            ("sections", self.sections.as_str()),
            ("lazy_images", self.lazy_images.as_str()),
            ("ripple_buttons", self.ripple_buttons.as_str()),
            ("typewriter_target", self.typewriter_target.as_str()),
        ]
        .into_iter()
    }
}

/// Class and attribute names toggled by the effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub active_class: String,
    pub scrolled_class: String,
    pub ripple_class: String,
    pub deferred_src_attr: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            active_class: "active".into(),
            scrolled_class: "scrolled".into(),
            ripple_class: "ripple".into(),
            deferred_src_attr: "data-src".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VanishConfig {
    pub mobile: VanishProfile,
    pub desktop: VanishProfile,
    /// Viewports at most this wide (CSS px) use the mobile profile.
    pub mobile_max_width: f64,
    /// Opacity at or below which a part is hidden and stops taking input.
    pub epsilon: f64,
    /// Opacity of the profile glow at rest; the fade scales it down from here.
    pub glow_max_opacity: f64,
    /// Scale of the profile image when fully vanished.
    pub min_scale: f64,
}

impl Default for VanishConfig {
    fn default() -> Self {
        Self {
            mobile: VanishProfile::MOBILE,
            desktop: VanishProfile::DESKTOP,
            mobile_max_width: 768.0,
            epsilon: 0.01,
            glow_max_opacity: 0.3,
            min_scale: 0.9,
        }
    }
}

impl VanishConfig {
    /// Profile for a viewport of `width` CSS px.
    #[inline]
    pub fn profile_for(&self, width: f64) -> VanishProfile {
        if width <= self.mobile_max_width {
            self.mobile
        } else {
            self.desktop
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: String,
    /// Initial downward offset in px.
    pub offset_px: f64,
    pub duration_s: f64,
    /// Per-index transition delay.
    pub stagger_s: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            offset_px: 20.0,
            duration_s: 0.6,
            stagger_s: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { factor: 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub hover_shadow: String,
    pub rest_shadow: String,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            hover_shadow: "0 0 30px rgba(102, 126, 234, 0.6)".into(),
            rest_shadow: "0 0 20px rgba(102, 126, 234, 0.3)".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveLinkConfig {
    /// Sections start counting this many px before their top edge.
    pub offset_px: f64,
}

impl Default for ActiveLinkConfig {
    fn default() -> Self {
        Self { offset_px: 100.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub resize_debounce_ms: u32,
    pub orientation_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            orientation_delay_ms: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub lifetime_ms: u32,
    /// Inject the ripple stylesheet into `<head>` at install time.
    pub inject_styles: bool,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 600,
            inject_styles: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub enabled: bool,
    pub speed_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            speed_ms: 100,
        }
    }
}

impl EffectsConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, EffectsError> {
        let cfg: EffectsConfig = serde_json::from_str(json)?;
        if let Err(err) = cfg.validate() {
            log::warn!("rejecting effects config: {err}");
            return Err(err);
        }
        log::debug!(
            "effects config parsed (resize debounce {}ms, typewriter {})",
            cfg.timing.resize_debounce_ms,
            cfg.typewriter.enabled
        );
        Ok(cfg)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EffectsError> {
        for (name, selector) in self.selectors.iter() {
            if selector.trim().is_empty() {
                return Err(EffectsError::invalid_config(format!(
                    "selector `{name}` must not be empty"
                )));
            }
        }

        for (name, profile) in [("mobile", self.vanish.mobile), ("desktop", self.vanish.desktop)] {
            if !profile.threshold.is_finite() || profile.threshold < 0.0 {
                return Err(EffectsError::invalid_config(format!(
                    "{name} vanish threshold must be finite and non-negative"
                )));
            }
            if !profile.distance.is_finite() || profile.distance <= 0.0 {
                return Err(EffectsError::invalid_config(format!(
                    "{name} vanish distance must be positive and finite"
                )));
            }
        }

        let v = &self.vanish;
        if !v.mobile_max_width.is_finite() || v.mobile_max_width < 0.0 {
            return Err(EffectsError::invalid_config(
                "mobile max width must be finite and non-negative",
            ));
        }
        if !(0.0..1.0).contains(&v.epsilon) {
            return Err(EffectsError::invalid_config("vanish epsilon must be in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&v.glow_max_opacity) {
            return Err(EffectsError::invalid_config(
                "glow max opacity must be in [0, 1]",
            ));
        }
        if !v.min_scale.is_finite() || v.min_scale < 0.0 {
            return Err(EffectsError::invalid_config(
                "min scale must be finite and non-negative",
            ));
        }

        let r = &self.reveal;
        if !(0.0..=1.0).contains(&r.threshold) {
            return Err(EffectsError::invalid_config("reveal threshold must be in [0, 1]"));
        }
        if !r.offset_px.is_finite()
            || !r.duration_s.is_finite()
            || r.duration_s < 0.0
            || !r.stagger_s.is_finite()
            || r.stagger_s < 0.0
        {
            return Err(EffectsError::invalid_config(
                "reveal offset, duration and stagger must be finite (duration/stagger non-negative)",
            ));
        }

        if !self.parallax.factor.is_finite() {
            return Err(EffectsError::invalid_config("parallax factor must be finite"));
        }
        if !self.active_link.offset_px.is_finite() {
            return Err(EffectsError::invalid_config("active link offset must be finite"));
        }

        if self.timing.resize_debounce_ms == 0 {
            return Err(EffectsError::invalid_config(
                "resize debounce must be greater than 0",
            ));
        }
        if self.ripple.lifetime_ms == 0 {
            return Err(EffectsError::invalid_config(
                "ripple lifetime must be greater than 0",
            ));
        }
        if self.typewriter.enabled && self.typewriter.speed_ms == 0 {
            return Err(EffectsError::invalid_config(
                "typewriter speed must be greater than 0",
            ));
        }

        Ok(())
    }

    #[inline]
    pub fn with_mobile_profile(mut self, profile: VanishProfile) -> Self {
        self.vanish.mobile = profile;
        self
    }

    #[inline]
    pub fn with_desktop_profile(mut self, profile: VanishProfile) -> Self {
        self.vanish.desktop = profile;
        self
    }

    #[inline]
    pub fn with_resize_debounce_ms(mut self, ms: u32) -> Self {
        self.timing.resize_debounce_ms = ms;
        self
    }

    #[inline]
    pub fn with_typewriter(mut self, enabled: bool, speed_ms: u32) -> Self {
        self.typewriter = TypewriterConfig { enabled, speed_ms };
        self
    }
}
