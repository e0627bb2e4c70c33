use crate::{
    config::RenderConfig,
    foundation::{core::Progress, error::ParallaxResult, math::sanitize_seconds},
    scene::{
        decor::Decorations,
        intro::{IntroFrame, IntroTimeline},
    },
    scroll::{
        mapper::{ScrollFrame, ScrollProgressMapper},
        metrics::ScrollMetrics,
        parallax::layers,
    },
};

/// Style parameters for one element. Absent fields are left to the stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
}

fn css_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

impl ElementStyle {
    /// Inline CSS declarations, e.g. `opacity: 0.8; backdrop-filter: blur(4px)`.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(o) = self.opacity {
            decls.push(format!("opacity: {}", css_num(o)));
        }

        let transform: Vec<String> = [
            self.translate_x.map(|x| format!("translateX({}px)", css_num(x))),
            self.translate_y.map(|y| format!("translateY({}px)", css_num(y))),
            self.rotate_deg.map(|r| format!("rotate({}deg)", css_num(r))),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !transform.is_empty() {
            decls.push(format!("transform: {}", transform.join(" ")));
        }

        if let Some(b) = self.blur_px {
            decls.push(format!("backdrop-filter: blur({}px)", css_num(b)));
        }
        decls.join("; ")
    }
}

/// Vertical translation of every named parallax layer, from page progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerOffsets {
    pub grid: f64,
    pub fractal: f64,
    pub hero_heading: f64,
    pub hero_sub_heading: f64,
    pub hero_cta: f64,
    pub disciplines_heading: f64,
    pub discipline_cards: [f64; 3],
    pub math_heading: f64,
    pub wave: f64,
    pub binary_lines: f64,
    pub floating_icons: f64,
    pub footer_links: f64,
    pub footer_legal: f64,
}

impl LayerOffsets {
    pub fn at(page_progress: Progress) -> Self {
        let p = page_progress;
        Self {
            grid: layers::GRID.offset_y(p),
            fractal: layers::FRACTAL.offset_y(p),
            hero_heading: layers::HERO_HEADING.offset_y(p),
            hero_sub_heading: layers::HERO_SUB_HEADING.offset_y(p),
            hero_cta: layers::HERO_CTA.offset_y(p),
            disciplines_heading: layers::DISCIPLINES_HEADING.offset_y(p),
            discipline_cards: std::array::from_fn(|i| layers::discipline_card(i).offset_y(p)),
            math_heading: layers::MATH_HEADING.offset_y(p),
            wave: layers::WAVE.offset_y(p),
            binary_lines: layers::BINARY_LINES.offset_y(p),
            floating_icons: layers::FLOATING_ICONS.offset_y(p),
            footer_links: layers::FOOTER_LINKS.offset_y(p),
            footer_legal: layers::FOOTER_LEGAL.offset_y(p),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AmbientFrame {
    pub binary_lines: Vec<ElementStyle>,
    pub icons: Vec<ElementStyle>,
}

/// One host sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneInput {
    /// Progress through the slide container.
    pub progress: Progress,
    /// Progress through the whole document; drives the parallax layers.
    pub page_progress: Progress,
    /// Seconds since mount.
    pub elapsed_s: f64,
}

impl SceneInput {
    /// Container and page progress equal, at mount time.
    pub fn new(progress: impl Into<Progress>) -> Self {
        let progress = progress.into();
        Self {
            progress,
            page_progress: progress,
            elapsed_s: 0.0,
        }
    }

    pub fn from_metrics(metrics: &ScrollMetrics, elapsed_s: f64) -> Self {
        Self {
            progress: metrics.progress(),
            page_progress: metrics.page_progress(),
            elapsed_s,
        }
    }

    pub fn page(mut self, page_progress: impl Into<Progress>) -> Self {
        self.page_progress = page_progress.into();
        self
    }

    pub fn elapsed(mut self, elapsed_s: f64) -> Self {
        self.elapsed_s = elapsed_s;
        self
    }
}

/// Everything the rendering layer needs for one sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSnapshot {
    pub scroll: ScrollFrame,
    /// `None` while the header is hidden.
    pub header: Option<ElementStyle>,
    pub slides: [ElementStyle; 3],
    pub layers: LayerOffsets,
    pub intro: IntroFrame,
    /// Only present once the page is hydrated.
    pub ambient: Option<AmbientFrame>,
}

/// Composes the scroll mapper, intro timeline and decorations for a render configuration.
#[derive(Clone, Debug)]
pub struct Scene {
    config: RenderConfig,
    mapper: ScrollProgressMapper,
    intro: IntroTimeline,
    decorations: Decorations,
}

impl Scene {
    pub fn new(config: RenderConfig) -> ParallaxResult<Self> {
        let mapper = ScrollProgressMapper::new(config.motion.clone())?;
        let decorations = Decorations::generate(config.seed)?;
        Ok(Self {
            config,
            mapper,
            intro: IntroTimeline::landing(),
            decorations,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn mapper(&self) -> &ScrollProgressMapper {
        &self.mapper
    }

    pub fn intro(&self) -> &IntroTimeline {
        &self.intro
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sample(&self, input: SceneInput) -> SceneSnapshot {
        let elapsed_s = sanitize_seconds(input.elapsed_s);
        let scroll = self.mapper.map(input.progress);
        let intro = self.intro.sample(elapsed_s);

        let header = scroll.header.visible.then(|| ElementStyle {
            opacity: Some(scroll.header.opacity),
            translate_y: Some(intro.header_y),
            blur_px: Some(scroll.header.blur_px),
            ..ElementStyle::default()
        });
        let slides = scroll.slides.map(|s| ElementStyle {
            opacity: Some(s.opacity),
            translate_y: Some(s.offset_y),
            ..ElementStyle::default()
        });

        let ambient = self.config.phase.is_hydrated().then(|| AmbientFrame {
            binary_lines: self
                .decorations
                .binary_lines
                .iter()
                .map(|l| l.sample(elapsed_s))
                .collect(),
            icons: self
                .decorations
                .icons
                .iter()
                .map(|i| i.sample(elapsed_s))
                .collect(),
        });

        SceneSnapshot {
            scroll,
            header,
            slides,
            layers: LayerOffsets::at(input.page_progress),
            intro,
            ambient,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/snapshot.rs"]
mod tests;
