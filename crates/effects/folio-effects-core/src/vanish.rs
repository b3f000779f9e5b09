//! Hero vanish: fades the hero's parts out as the page scrolls past a
//! threshold, and restores them when scrolled back to the top.
//!
//! The computation is split in two steps:
//! - [`VanishFrame::compute`] turns viewport metrics into either a reset or an
//!   apply phase with a single opacity;
//! - [`VanishFrame::patch_for`] expands that phase into the writes for one
//!   [`HeroPart`].
//!
//! Each part's patch is complete on its own (every property the part manages
//! is written in both phases), so a frame always overwrites whatever the
//! previous frame left behind.

use serde::{Deserialize, Serialize};

use crate::config::{EffectsConfig, Markers, Selectors, VanishConfig};
use crate::style::{css_number, scale, ElementPatch, PointerEvents, StyleProp, Visibility};

/// Scroll threshold and fade distance, in CSS px.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VanishProfile {
    pub threshold: f64,
    pub distance: f64,
}

impl VanishProfile {
    pub const MOBILE: VanishProfile = VanishProfile {
        threshold: 30.0,
        distance: 100.0,
    };
    pub const DESKTOP: VanishProfile = VanishProfile {
        threshold: 50.0,
        distance: 150.0,
    };

    /// Scroll offset at which the fade completes.
    #[inline]
    pub fn end(&self) -> f64 {
        self.threshold + self.distance
    }
}

/// Layout metrics read from the window on each event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64) -> Self {
        Self { scroll_y, width }
    }
}

/// Fade opacity for `scroll_y` under `profile`, in `[0, 1]`.
///
/// `1` at or below the threshold, `0` from `threshold + distance` on, linear in
/// between.
#[inline]
pub fn vanish_opacity(scroll_y: f64, profile: VanishProfile) -> f64 {
    if scroll_y.is_nan() || scroll_y <= profile.threshold {
        return 1.0;
    }
    let progress = ((scroll_y - profile.threshold) / profile.distance).min(1.0);
    (1.0 - progress).max(0.0)
}

/// The five hero parts touched by the vanish effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroPart {
    ProfileImage,
    ProfileGlow,
    SocialIcons,
    HeroText,
    HeroButtons,
}

impl HeroPart {
    pub const ALL: [HeroPart; 5] = [
        HeroPart::ProfileImage,
        HeroPart::ProfileGlow,
        HeroPart::SocialIcons,
        HeroPart::HeroText,
        HeroPart::HeroButtons,
    ];

    pub fn selector(self, selectors: &Selectors) -> &str {
        match self {
            HeroPart::ProfileImage => &selectors.profile_image,
            HeroPart::ProfileGlow => &selectors.profile_glow,
            HeroPart::SocialIcons => &selectors.social_icons,
            HeroPart::HeroText => &selectors.hero_text,
            HeroPart::HeroButtons => &selectors.hero_buttons,
        }
    }

    /// Parts that stop receiving pointer input once faded out.
    pub fn manages_pointer_events(self) -> bool {
        matches!(
            self,
            HeroPart::ProfileImage | HeroPart::SocialIcons | HeroPart::HeroButtons
        )
    }

    /// Parts that carry the `scrolled` class while faded.
    pub fn carries_scrolled_marker(self) -> bool {
        !matches!(self, HeroPart::HeroButtons)
    }
}

/// Outcome of one vanish computation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum VanishPhase {
    /// At or below the threshold: everything back to baseline.
    Reset,
    /// Past the threshold, fading with the given opacity.
    Apply { opacity: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct VanishFrame<'a> {
    pub phase: VanishPhase,
    cfg: &'a VanishConfig,
    markers: &'a Markers,
}

impl<'a> VanishFrame<'a> {
    pub fn compute(cfg: &'a EffectsConfig, viewport: Viewport) -> Self {
        let profile = cfg.vanish.profile_for(viewport.width);
        let phase = if viewport.scroll_y > profile.threshold {
            VanishPhase::Apply {
                opacity: vanish_opacity(viewport.scroll_y, profile),
            }
        } else {
            VanishPhase::Reset
        };
        Self {
            phase,
            cfg: &cfg.vanish,
            markers: &cfg.markers,
        }
    }

    /// Base opacity for the frame (before the glow cap).
    pub fn opacity(&self) -> f64 {
        match self.phase {
            VanishPhase::Reset => 1.0,
            VanishPhase::Apply { opacity } => opacity,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self.phase, VanishPhase::Reset)
    }

    /// Opacity written to `part`.
    pub fn part_opacity(&self, part: HeroPart) -> f64 {
        match part {
            HeroPart::ProfileGlow => (self.opacity() * self.cfg.glow_max_opacity).max(0.0),
            _ => self.opacity(),
        }
    }

    fn shown(&self) -> bool {
        match self.phase {
            VanishPhase::Reset => true,
            VanishPhase::Apply { opacity } => opacity > self.cfg.epsilon,
        }
    }

    pub fn visibility(&self) -> Visibility {
        if self.shown() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn pointer_events(&self) -> PointerEvents {
        if self.shown() {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        }
    }

    /// Complete set of writes for `part` in this frame.
    pub fn patch_for(&self, part: HeroPart) -> ElementPatch {
        let mut patch = ElementPatch::new()
            .set(StyleProp::Opacity, css_number(self.part_opacity(part)))
            .set(StyleProp::Visibility, self.visibility().as_css());

        if part.manages_pointer_events() {
            patch = patch.set(StyleProp::PointerEvents, self.pointer_events().as_css());
        }
        if part == HeroPart::ProfileImage {
            let min = self.cfg.min_scale;
            patch = patch.set(
                StyleProp::Transform,
                scale(min + self.opacity() * (1.0 - min)),
            );
        }
        if part.carries_scrolled_marker() {
            let class = self.markers.scrolled_class.clone();
            patch = if self.is_reset() {
                patch.remove_class(class)
            } else {
                patch.add_class(class)
            };
        }
        patch
    }

    /// Patches for every part, in [`HeroPart::ALL`] order.
    pub fn patches(&self) -> Vec<(HeroPart, ElementPatch)> {
        HeroPart::ALL
            .iter()
            .map(|&part| (part, self.patch_for(part)))
            .collect()
    }
}

/// Whether `pathname` is the site's home view.
pub fn is_home_path(pathname: &str) -> bool {
    pathname.contains("index.html") || pathname.ends_with('/') || pathname == "/"
}
