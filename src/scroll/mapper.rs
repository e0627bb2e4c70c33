use crate::{
    animation::ramp::Ramp,
    config::MotionConfig,
    foundation::{core::Progress, error::ParallaxResult},
};

/// Two-state header flag. Flips exactly at the threshold with no hysteresis band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderVisibility {
    Visible,
    Hidden,
}

impl HeaderVisibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeaderVisual {
    /// In `[0, 1]`.
    pub opacity: f64,
    pub blur_px: f64,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlideVisual {
    /// In `[0, 1]`.
    pub opacity: f64,
    /// Vertical translation in CSS px.
    pub offset_y: f64,
}

/// Everything the scroll signal drives, for one sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollFrame {
    pub progress: Progress,
    pub header: HeaderVisual,
    /// Hero, disciplines, math; in stacking order.
    pub slides: [SlideVisual; 3],
}

/// Ramp-backed scroll channels, in chart order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollChannel {
    HeaderOpacity,
    HeaderBlur,
    MiddlegroundY,
    SlideOneOpacity,
    SlideTwoOffset,
    SlideTwoOpacity,
    SlideThreeOffset,
    SlideThreeOpacity,
}

impl ScrollChannel {
    pub const ALL: [Self; 8] = [
        Self::HeaderOpacity,
        Self::HeaderBlur,
        Self::MiddlegroundY,
        Self::SlideOneOpacity,
        Self::SlideTwoOffset,
        Self::SlideTwoOpacity,
        Self::SlideThreeOffset,
        Self::SlideThreeOpacity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::HeaderOpacity => "header_opacity",
            Self::HeaderBlur => "header_blur",
            Self::MiddlegroundY => "middleground_y",
            Self::SlideOneOpacity => "slide_one_opacity",
            Self::SlideTwoOffset => "slide_two_offset",
            Self::SlideTwoOpacity => "slide_two_opacity",
            Self::SlideThreeOffset => "slide_three_offset",
            Self::SlideThreeOpacity => "slide_three_opacity",
        }
    }

    pub fn is_opacity(self) -> bool {
        matches!(
            self,
            Self::HeaderOpacity
                | Self::SlideOneOpacity
                | Self::SlideTwoOpacity
                | Self::SlideThreeOpacity
        )
    }

    pub fn ramp(self, config: &MotionConfig) -> &Ramp {
        match self {
            Self::HeaderOpacity => &config.header_opacity,
            Self::HeaderBlur => &config.header_blur,
            Self::MiddlegroundY => &config.middleground_y,
            Self::SlideOneOpacity => &config.slide_one_opacity,
            Self::SlideTwoOffset => &config.slide_two_offset,
            Self::SlideTwoOpacity => &config.slide_two_opacity,
            Self::SlideThreeOffset => &config.slide_three_offset,
            Self::SlideThreeOpacity => &config.slide_three_opacity,
        }
    }
}

/// Stateless map from scroll progress to presentation parameters.
///
/// Every operation is total: inputs are normalized through [`Progress`] (clamped, `NaN` as
/// `0`), and opacities are clamped to `[0, 1]` on the way out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollProgressMapper {
    config: MotionConfig,
}

impl ScrollProgressMapper {
    pub fn new(config: MotionConfig) -> ParallaxResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn channel(&self, channel: ScrollChannel, progress: impl Into<Progress>) -> f64 {
        let v = channel.ramp(&self.config).sample(progress.into().get());
        if channel.is_opacity() {
            v.clamp(0.0, 1.0)
        } else {
            v
        }
    }

    pub fn header_opacity(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::HeaderOpacity, progress)
    }

    pub fn header_blur(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::HeaderBlur, progress)
    }

    pub fn header_visible(&self, progress: impl Into<Progress>) -> bool {
        progress.into().get() < self.config.header_hide_at
    }

    pub fn header_visibility(&self, progress: impl Into<Progress>) -> HeaderVisibility {
        HeaderVisibility::from_visible(self.header_visible(progress))
    }

    pub fn middleground_y(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::MiddlegroundY, progress)
    }

    pub fn slide_one_opacity(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::SlideOneOpacity, progress)
    }

    pub fn slide_two_offset(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::SlideTwoOffset, progress)
    }

    pub fn slide_two_opacity(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::SlideTwoOpacity, progress)
    }

    pub fn slide_three_offset(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::SlideThreeOffset, progress)
    }

    pub fn slide_three_opacity(&self, progress: impl Into<Progress>) -> f64 {
        self.channel(ScrollChannel::SlideThreeOpacity, progress)
    }

    pub fn header(&self, progress: impl Into<Progress>) -> HeaderVisual {
        let p = progress.into();
        HeaderVisual {
            opacity: self.header_opacity(p),
            blur_px: self.header_blur(p),
            visible: self.header_visible(p),
        }
    }

    pub fn slides(&self, progress: impl Into<Progress>) -> [SlideVisual; 3] {
        let p = progress.into();
        [
            SlideVisual {
                opacity: self.slide_one_opacity(p),
                offset_y: self.middleground_y(p),
            },
            SlideVisual {
                opacity: self.slide_two_opacity(p),
                offset_y: self.slide_two_offset(p),
            },
            SlideVisual {
                opacity: self.slide_three_opacity(p),
                offset_y: self.slide_three_offset(p),
            },
        ]
    }

    pub fn map(&self, progress: impl Into<Progress>) -> ScrollFrame {
        let progress = progress.into();
        ScrollFrame {
            progress,
            header: self.header(progress),
            slides: self.slides(progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
