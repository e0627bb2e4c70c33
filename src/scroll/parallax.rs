use crate::foundation::core::Progress;

/// Full-page travel of a speed-1 layer, in CSS px.
pub const LAYER_TRAVEL_PX: f64 = 100.0;

/// A layer that drifts upward as the page scrolls, `speed` times the base travel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxLayer {
    pub speed: f64,
}

impl ParallaxLayer {
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Vertical translation at page progress `progress`: `0` at the top, `-100 * speed` at the
    /// bottom.
    pub fn offset_y(&self, progress: impl Into<Progress>) -> f64 {
        if !self.speed.is_finite() {
            return 0.0;
        }
        -LAYER_TRAVEL_PX * self.speed * progress.into().get()
    }
}

/// Layers used by the landing page.
pub mod layers {
    use super::ParallaxLayer;

    pub const GRID: ParallaxLayer = ParallaxLayer::new(0.2);
    pub const FRACTAL: ParallaxLayer = ParallaxLayer::new(0.5);
    pub const HERO_HEADING: ParallaxLayer = ParallaxLayer::new(0.3);
    pub const HERO_SUB_HEADING: ParallaxLayer = ParallaxLayer::new(0.6);
    pub const HERO_CTA: ParallaxLayer = ParallaxLayer::new(0.7);
    pub const DISCIPLINES_HEADING: ParallaxLayer = ParallaxLayer::new(0.4);
    pub const MATH_HEADING: ParallaxLayer = ParallaxLayer::new(0.3);
    pub const WAVE: ParallaxLayer = ParallaxLayer::new(0.5);
    pub const BINARY_LINES: ParallaxLayer = ParallaxLayer::new(0.8);
    pub const FLOATING_ICONS: ParallaxLayer = ParallaxLayer::new(1.2);
    pub const FOOTER_LINKS: ParallaxLayer = ParallaxLayer::new(0.3);
    pub const FOOTER_LEGAL: ParallaxLayer = ParallaxLayer::new(0.4);

    /// Discipline card `index` (0-based), each a little faster than the last.
    pub fn discipline_card(index: usize) -> ParallaxLayer {
        ParallaxLayer::new(0.5 + index as f64 * 0.1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/parallax.rs"]
mod tests;
