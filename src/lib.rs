//! Parallax is the motion model behind the Self University landing page.
//!
//! The page is a tall scroll container holding three fixed, overlapping slides. Everything
//! that moves on it is a pure function of one of two signals:
//!
//! - **scroll progress** in `[0, 1]` (slide opacities and offsets, header opacity/blur/visibility,
//!   parallax layer translation), and
//! - **elapsed time** since mount (intro fades, spring slide-ins, path drawing, ambient loops).
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: the host turns raw scroll geometry into [`Progress`] via [`ScrollMetrics`].
//! 2. **Map**: [`ScrollProgressMapper`] turns progress into a [`ScrollFrame`].
//! 3. **Compose**: [`Scene`] adds parallax offsets, the intro timeline and (once hydrated) the
//!    seeded ambient decorations, producing a serializable [`SceneSnapshot`].
//!
//! The mapper is stateless. The only state lives in the host-owned [`ScrollDriver`], which
//! remembers the last header visibility so it can report transitions.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod scene;
mod scroll;

/// Channel charting for inspecting the scroll ramps.
pub mod chart;

pub use animation::ease::Ease;
pub use animation::ramp::{Lerp, Ramp};
pub use animation::spring::{Spring, SpringMotion};
pub use animation::tween::{Cycle, DEFAULT_TWEEN_EASE, DEFAULT_TWEEN_SECS, LoopMode, Tween};
pub use config::{MotionConfig, RenderConfig, RenderPhase};
pub use foundation::core::Progress;
pub use foundation::error::{ParallaxError, ParallaxResult};
pub use foundation::math::SplitMix64;
pub use scene::decor::{
    BinaryLine, Decorations, FRACTAL_PLACEMENTS, FloatingIcon, FractalPlacement, ICON_DRIFT,
    IconKind, WaveBar,
};
pub use scene::intro::{
    DISCIPLINES, FadeRise, IntroFrame, IntroTimeline, LOGO_TURN_SECS, NAV_ITEMS, Rise,
};
pub use scene::snapshot::{
    AmbientFrame, ElementStyle, LayerOffsets, Scene, SceneInput, SceneSnapshot,
};
pub use scroll::driver::{DriverUpdate, ScrollDriver, VisibilityChange};
pub use scroll::mapper::{
    HeaderVisibility, HeaderVisual, ScrollChannel, ScrollFrame, ScrollProgressMapper,
    SlideVisual,
};
pub use scroll::metrics::ScrollMetrics;
pub use scroll::parallax::{ParallaxLayer, layers};
