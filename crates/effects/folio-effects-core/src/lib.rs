//! Folio Effects Core (engine-agnostic)
//!
//! Presentation math and scheduling state for the folio site's effects: the
//! hero vanish fade, parallax, entrance reveals, active-link selection, ripple
//! geometry, and the throttle/debounce bookkeeping that drives them. Nothing
//! here touches the DOM; adapters read metrics, call into this crate, and apply
//! the returned [`ElementPatch`]es.

pub mod active_link;
pub mod anchor;
pub mod config;
pub mod effects;
pub mod error;
pub mod reveal;
pub mod ripple;
pub mod style;
pub mod throttle;
pub mod typewriter;
pub mod vanish;

// Re-exports for consumers (adapters)
pub use active_link::{active_section, fragment_href, link_selector, SectionMetrics};
pub use anchor::fragment_selector;
pub use config::{
    ActiveLinkConfig, EffectsConfig, GlowConfig, Markers, ParallaxConfig, RevealConfig,
    RippleConfig, Selectors, TimingConfig, TypewriterConfig, VanishConfig,
};
pub use effects::{glow_patch, parallax_offset, parallax_patch, Hover};
pub use error::EffectsError;
pub use reveal::{hidden_patch, revealed_patch, stagger_delay_s};
pub use ripple::{ClientRect, RippleGeometry, RIPPLE_CSS};
pub use style::{ClassChange, ElementPatch, PointerEvents, StyleProp, StyleWrite, Visibility};
pub use throttle::{DebounceTicket, Debouncer, FrameThrottle};
pub use typewriter::Typewriter;
pub use vanish::{
    is_home_path, vanish_opacity, HeroPart, VanishFrame, VanishPhase, VanishProfile, Viewport,
};

/// Effects result type
pub type Result<T> = core::result::Result<T, EffectsError>;
