use kurbo::{Affine, BezPath, Vec2};

use crate::{
    animation::{
        ramp::Lerp,
        tween::{Cycle, LoopMode},
    },
    foundation::{error::ParallaxResult, math::SplitMix64},
    scene::snapshot::ElementStyle,
};

/// Placement of one fractal outline inside the hero's `0 0 100 100` viewBox.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FractalPlacement {
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
}

pub const FRACTAL_PLACEMENTS: [FractalPlacement; 5] = [
    FractalPlacement {
        x: 64.74,
        y: 46.25,
        rotation_deg: 296.07,
        scale: 0.24,
    },
    FractalPlacement {
        x: 34.45,
        y: 45.01,
        rotation_deg: 10.48,
        scale: 0.19,
    },
    FractalPlacement {
        x: 18.59,
        y: 86.01,
        rotation_deg: 10.61,
        scale: 0.28,
    },
    FractalPlacement {
        x: 73.26,
        y: 57.88,
        rotation_deg: 211.84,
        scale: 0.22,
    },
    FractalPlacement {
        x: 71.21,
        y: 76.29,
        rotation_deg: 6.75,
        scale: 0.26,
    },
];

impl FractalPlacement {
    /// `translate(x y) rotate(r) scale(s)`, applied right to left.
    pub fn transform(&self) -> Affine {
        Affine::translate((self.x, self.y))
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
    }

    pub fn outline(&self) -> BezPath {
        let mut path = outline_square();
        path.apply_affine(self.transform());
        path
    }
}

fn outline_square() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((90.0, 10.0));
    path.line_to((90.0, 90.0));
    path.line_to((10.0, 90.0));
    path.close_path();
    path
}

pub const BINARY_LINE_COUNT: usize = 20;
const BINARY_LINE_CHARS: usize = 20;

/// Drifting `1010…` strip behind the slides.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryLine {
    pub left_pct: f64,
    pub top_pct: f64,
    pub content: String,
    /// In `[0.5, 1.0)`; one drift pass takes `10 / speed` seconds.
    pub speed: f64,
    y: Cycle,
    opacity: Cycle,
}

impl BinaryLine {
    fn new(index: usize, rng: &mut SplitMix64) -> ParallaxResult<Self> {
        let i = index as f64;
        let speed = 0.5 + rng.next_f64() * 0.5;
        let duration_s = 10.0 / speed;
        let (first, second) = if index % 2 == 0 { ('1', '0') } else { ('0', '1') };
        let content = (0..BINARY_LINE_CHARS)
            .map(|c| if c % 2 == 0 { first } else { second })
            .collect();

        Ok(Self {
            left_pct: 10.0 + i * 4.0,
            top_pct: 10.0 + i.sin() * 20.0,
            content,
            speed,
            y: Cycle::keyframes(&[0.0, 100.0, 0.0], duration_s, LoopMode::PingPong)?,
            opacity: Cycle::keyframes(&[0.02, 0.1, 0.02], duration_s, LoopMode::PingPong)?,
        })
    }

    pub fn duration_s(&self) -> f64 {
        self.y.duration_s()
    }

    pub fn sample(&self, elapsed_s: f64) -> ElementStyle {
        ElementStyle {
            opacity: Some(self.opacity.sample(elapsed_s)),
            translate_y: Some(self.y.sample(elapsed_s)),
            ..ElementStyle::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Code,
    Cpu,
    BrainCircuit,
    Network,
    GitBranch,
}

impl IconKind {
    pub const FLOATING: [Self; 5] = [
        Self::Code,
        Self::Cpu,
        Self::BrainCircuit,
        Self::Network,
        Self::GitBranch,
    ];
}

/// Farthest point of an icon's drift, reached halfway through each pass.
pub const ICON_DRIFT: Vec2 = Vec2::new(50.0, 100.0);

/// Large faint icon wandering across the page.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingIcon {
    pub kind: IconKind,
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    /// Fraction of [`ICON_DRIFT`] covered; x and y share keyframe times.
    drift: Cycle,
    rotate: Cycle,
}

impl FloatingIcon {
    fn new(index: usize, kind: IconKind) -> ParallaxResult<Self> {
        let i = index as f64;
        let duration_s = 15.0 + i * 3.0;
        Ok(Self {
            kind,
            left_pct: 10.0 + i * 15.0,
            top_pct: 20.0 + i.sin() * 20.0,
            size_px: 80.0,
            drift: Cycle::keyframes(&[0.0, 1.0, 0.0], duration_s, LoopMode::PingPong)?,
            rotate: Cycle::keyframes(&[0.0, 360.0], duration_s, LoopMode::PingPong)?,
        })
    }

    pub fn duration_s(&self) -> f64 {
        self.rotate.duration_s()
    }

    pub fn offset(&self, elapsed_s: f64) -> Vec2 {
        Lerp::lerp(&Vec2::ZERO, &ICON_DRIFT, self.drift.sample(elapsed_s))
    }

    pub fn sample(&self, elapsed_s: f64) -> ElementStyle {
        let offset = self.offset(elapsed_s);
        ElementStyle {
            translate_x: Some(offset.x),
            translate_y: Some(offset.y),
            rotate_deg: Some(self.rotate.sample(elapsed_s)),
            ..ElementStyle::default()
        }
    }
}

pub const WAVE_BAR_COUNT: usize = 40;
/// Baseline of the wave in its `0 0 800 400` viewBox.
pub const WAVE_BASELINE: f64 = 400.0;

/// One vertical stroke of the "MATH_IS_BEAUTIFUL" wave.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WaveBar {
    pub x: f64,
    pub top: f64,
}

impl WaveBar {
    pub fn new(index: usize) -> Self {
        let i = index as f64;
        Self {
            x: i * 20.0,
            top: 350.0 - (i / 5.0).sin() * 100.0 - (index % 3) as f64 * 30.0,
        }
    }

    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((self.x, WAVE_BASELINE));
        path.line_to((self.x, self.top));
        path
    }
}

/// All ambient decorations, generated once per seed.
#[derive(Clone, Debug, PartialEq)]
pub struct Decorations {
    pub seed: u64,
    pub fractals: Vec<FractalPlacement>,
    pub binary_lines: Vec<BinaryLine>,
    pub icons: Vec<FloatingIcon>,
    pub wave_bars: Vec<WaveBar>,
}

impl Decorations {
    #[tracing::instrument]
    pub fn generate(seed: u64) -> ParallaxResult<Self> {
        let mut rng = SplitMix64::new(seed);
        let binary_lines = (0..BINARY_LINE_COUNT)
            .map(|i| BinaryLine::new(i, &mut rng))
            .collect::<ParallaxResult<Vec<_>>>()?;
        let icons = IconKind::FLOATING
            .into_iter()
            .enumerate()
            .map(|(i, kind)| FloatingIcon::new(i, kind))
            .collect::<ParallaxResult<Vec<_>>>()?;

        tracing::debug!(
            lines = binary_lines.len(),
            icons = icons.len(),
            "generated decorations"
        );
        Ok(Self {
            seed,
            fractals: FRACTAL_PLACEMENTS.to_vec(),
            binary_lines,
            icons,
            wave_bars: (0..WAVE_BAR_COUNT).map(WaveBar::new).collect(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/decor.rs"]
mod tests;
