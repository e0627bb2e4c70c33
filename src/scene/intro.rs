use crate::{
    animation::{
        ease::Ease,
        ramp::Ramp,
        spring::{Spring, SpringMotion},
        tween::{Cycle, LoopMode, Tween},
    },
    scene::{decor::FRACTAL_PLACEMENTS, decor::WAVE_BAR_COUNT, snapshot::ElementStyle},
};

pub const NAV_ITEMS: [&str; 4] = ["Curriculum", "Labs", "Research", "Admissions"];

pub const DISCIPLINES: [&str; 3] = [
    "Quantum Computing",
    "Neural Architectures",
    "Decentralized Systems",
];

/// One full turn of the header logo.
pub const LOGO_TURN_SECS: f64 = 20.0;

const HEADER_SPRING: Spring = Spring::fixed(100.0, 20.0, 1.0);

/// Vertical entrance of a revealed element.
#[derive(Clone, Debug, PartialEq)]
pub enum Rise {
    /// Transition without a duration: the implicit transform spring.
    Spring(SpringMotion),
    /// Transition with an explicit duration.
    Timed(Tween<f64>),
}

impl Rise {
    pub fn sample(&self, elapsed_s: f64) -> f64 {
        match self {
            Self::Spring(motion) => motion.sample(elapsed_s),
            Self::Timed(tween) => tween.sample(elapsed_s),
        }
    }
}

/// Opacity tween paired with an optional vertical rise sharing the same delay.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeRise {
    pub opacity: Tween<f64>,
    pub y: Option<Rise>,
}

impl FadeRise {
    pub fn new(delay_s: f64, rise_from: Option<f64>) -> Self {
        Self {
            opacity: Tween::new(0.0, 1.0).delay(delay_s),
            y: rise_from.map(|from| {
                Rise::Spring(SpringMotion::new(from, 0.0, Spring::TRANSFORM).delay(delay_s))
            }),
        }
    }

    /// Both channels share an explicit duration and ease in and out.
    pub fn timed(delay_s: f64, duration_s: f64, rise_from: Option<f64>) -> Self {
        let tween = |from: f64, to: f64| {
            Tween::new(from, to)
                .delay(delay_s)
                .duration(duration_s)
                .ease(Ease::EaseInOut)
        };
        Self {
            opacity: tween(0.0, 1.0),
            y: rise_from.map(|from| Rise::Timed(tween(from, 0.0))),
        }
    }

    /// Plain opacity fade with the default transition.
    pub fn fade_in() -> Self {
        Self::new(0.0, None)
    }

    pub fn sample(&self, elapsed_s: f64) -> ElementStyle {
        ElementStyle {
            opacity: Some(self.opacity.sample(elapsed_s)),
            translate_y: self.y.as_ref().map(|y| y.sample(elapsed_s)),
            ..ElementStyle::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntroFrame {
    pub header_y: f64,
    pub logo_rotate_deg: f64,
    pub nav: Vec<ElementStyle>,
    pub heading: ElementStyle,
    pub sub_heading: ElementStyle,
    pub cta: ElementStyle,
    /// Drawn fraction of each fractal outline.
    pub fractal_path_length: Vec<f64>,
    /// Drawn fraction of each wave bar.
    pub wave_path_length: Vec<f64>,
}

/// Mount-time animations, sampled by seconds since the page mounted.
///
/// The `*_reveal` members play when their element first scrolls into view. The host
/// records that moment and samples them with seconds elapsed since, as with
/// [`IntroTimeline::header_exit`].
#[derive(Clone, Debug, PartialEq)]
pub struct IntroTimeline {
    pub header: SpringMotion,
    pub logo: Cycle,
    pub nav: Vec<FadeRise>,
    pub heading: FadeRise,
    pub sub_heading: FadeRise,
    pub cta: FadeRise,
    pub fractal_paths: Vec<Tween<f64>>,
    pub wave_bars: Vec<Tween<f64>>,
    pub disciplines_heading_reveal: FadeRise,
    pub discipline_card_reveals: Vec<FadeRise>,
    pub footer_reveal: FadeRise,
}

impl Default for IntroTimeline {
    fn default() -> Self {
        Self::landing()
    }
}

impl IntroTimeline {
    pub fn landing() -> Self {
        let draw = |delay_s: f64| {
            Tween::new(0.0, 1.0)
                .duration(2.0)
                .delay(delay_s)
                .ease(Ease::EaseInOut)
        };
        let logo = Cycle::fixed(
            Ramp::fixed([0.0, 1.0], [0.0, 360.0]),
            LOGO_TURN_SECS,
            LoopMode::Repeat,
        )
        .with_ease(Ease::Linear);

        Self {
            header: SpringMotion::new(-100.0, 0.0, HEADER_SPRING),
            logo,
            nav: (0..NAV_ITEMS.len())
                .map(|i| FadeRise::new(0.3 + i as f64 * 0.1, Some(-10.0)))
                .collect(),
            heading: FadeRise::new(0.2, Some(20.0)),
            sub_heading: FadeRise::new(0.4, Some(20.0)),
            cta: FadeRise::new(0.6, None),
            fractal_paths: (0..FRACTAL_PLACEMENTS.len())
                .map(|i| draw(i as f64 * 0.1))
                .collect(),
            wave_bars: (0..WAVE_BAR_COUNT).map(|i| draw(i as f64 * 0.02)).collect(),
            disciplines_heading_reveal: FadeRise::fade_in(),
            discipline_card_reveals: (0..DISCIPLINES.len())
                .map(|i| FadeRise::timed(i as f64 * 0.2, 0.5, Some(30.0)))
                .collect(),
            footer_reveal: FadeRise::fade_in(),
        }
    }

    /// Header slide-out played when the header leaves, sampled from the moment it hid.
    pub fn header_exit(&self) -> SpringMotion {
        self.header.reversed()
    }

    /// Latest end time across the mount tweens; springs settle asymptotically and the
    /// logo never stops, so neither is counted. Reveals run on their own clocks.
    pub fn tweens_end_s(&self) -> f64 {
        self.nav
            .iter()
            .chain([&self.heading, &self.sub_heading, &self.cta])
            .map(|f| f.opacity.end_s())
            .chain(self.fractal_paths.iter().map(Tween::end_s))
            .chain(self.wave_bars.iter().map(Tween::end_s))
            .fold(0.0, f64::max)
    }

    pub fn sample(&self, elapsed_s: f64) -> IntroFrame {
        IntroFrame {
            header_y: self.header.sample(elapsed_s),
            logo_rotate_deg: self.logo.sample(elapsed_s),
            nav: self.nav.iter().map(|n| n.sample(elapsed_s)).collect(),
            heading: self.heading.sample(elapsed_s),
            sub_heading: self.sub_heading.sample(elapsed_s),
            cta: self.cta.sample(elapsed_s),
            fractal_path_length: self
                .fractal_paths
                .iter()
                .map(|t| t.sample(elapsed_s))
                .collect(),
            wave_path_length: self.wave_bars.iter().map(|t| t.sample(elapsed_s)).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/intro.rs"]
mod tests;
