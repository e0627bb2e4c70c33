use std::path::Path;

use crate::{
    animation::ramp::Ramp,
    foundation::error::{ParallaxError, ParallaxResult},
};

/// Breakpoint tables for every scroll-driven channel.
///
/// `Default` reproduces the landing page. Any field omitted from a JSON file falls back to its
/// default, so a config only needs to list the channels it retunes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub header_opacity: Ramp,
    /// Backdrop blur in px.
    pub header_blur: Ramp,
    /// The header is visible while progress is strictly below this value.
    pub header_hide_at: f64,
    /// Translation of the hero slide's middleground.
    pub middleground_y: Ramp,
    pub slide_one_opacity: Ramp,
    pub slide_two_offset: Ramp,
    pub slide_two_opacity: Ramp,
    pub slide_three_offset: Ramp,
    pub slide_three_opacity: Ramp,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            header_opacity: Ramp::fixed([0.0, 0.1], [1.0, 0.8]),
            header_blur: Ramp::fixed([0.0, 0.1], [0.0, 4.0]),
            header_hide_at: 0.95,
            middleground_y: Ramp::fixed([0.0, 1.0], [0.0, -150.0]),
            slide_one_opacity: Ramp::fixed([0.0, 0.3], [1.0, 0.0]),
            slide_two_offset: Ramp::fixed([0.2, 0.7], [300.0, 0.0]),
            slide_two_opacity: Ramp::fixed([0.2, 0.4], [0.0, 1.0]),
            slide_three_offset: Ramp::fixed([0.5, 1.0], [500.0, 0.0]),
            slide_three_opacity: Ramp::fixed([0.5, 0.7], [0.0, 1.0]),
        }
    }
}

impl MotionConfig {
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> ParallaxResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ParallaxError::config(format!("read motion config '{}': {e}", path.display()))
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "loaded motion config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> ParallaxResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ParallaxResult<()> {
        if !(0.0..=1.0).contains(&self.header_hide_at) {
            return Err(ParallaxError::config(
                "header_hide_at must be within [0, 1]",
            ));
        }

        let opacities = [
            ("header_opacity", &self.header_opacity),
            ("slide_one_opacity", &self.slide_one_opacity),
            ("slide_two_opacity", &self.slide_two_opacity),
            ("slide_three_opacity", &self.slide_three_opacity),
        ];
        for (name, ramp) in opacities {
            let (lo, hi) = ramp.output_bounds();
            if lo < 0.0 || hi > 1.0 {
                return Err(ParallaxError::config(format!(
                    "{name} outputs must be within [0, 1]"
                )));
            }
        }

        if self.header_blur.output_bounds().0 < 0.0 {
            return Err(ParallaxError::config("header_blur outputs must be >= 0"));
        }
        Ok(())
    }
}

/// Whether the page has completed its first client render.
///
/// Floating decorations are only emitted once `Hydrated`, so the first render matches a
/// server-rendered page exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPhase {
    #[default]
    Initial,
    Hydrated,
}

impl RenderPhase {
    pub fn is_hydrated(self) -> bool {
        matches!(self, Self::Hydrated)
    }
}

/// Everything a host passes in when building a [`crate::Scene`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub phase: RenderPhase,
    /// Seed for the decoration generator.
    pub seed: u64,
    pub motion: MotionConfig,
}

impl RenderConfig {
    pub fn hydrated(mut self) -> Self {
        self.phase = RenderPhase::Hydrated;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
