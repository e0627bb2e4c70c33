//! Plot every ramp-backed scroll channel over progress into an RGBA image.
//!
//! Each channel is normalized by its largest absolute output so opacities, blur and pixel
//! offsets share one vertical axis. The header threshold is drawn as a vertical marker.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::{
    foundation::error::{ParallaxError, ParallaxResult},
    scroll::mapper::{ScrollChannel, ScrollProgressMapper},
};

const BACKGROUND: Rgba<u8> = Rgba([18, 20, 28, 255]);
const AXIS: Rgba<u8> = Rgba([70, 74, 90, 255]);
const THRESHOLD: Rgba<u8> = Rgba([200, 60, 60, 255]);

/// Line colour for `channel`.
pub fn channel_color(channel: ScrollChannel) -> Rgba<u8> {
    match channel {
        ScrollChannel::HeaderOpacity => Rgba([255, 255, 255, 255]),
        ScrollChannel::HeaderBlur => Rgba([150, 150, 150, 255]),
        ScrollChannel::MiddlegroundY => Rgba([120, 200, 255, 255]),
        ScrollChannel::SlideOneOpacity => Rgba([255, 210, 90, 255]),
        ScrollChannel::SlideTwoOffset => Rgba([120, 255, 160, 255]),
        ScrollChannel::SlideTwoOpacity => Rgba([60, 200, 110, 255]),
        ScrollChannel::SlideThreeOffset => Rgba([255, 130, 220, 255]),
        ScrollChannel::SlideThreeOpacity => Rgba([200, 80, 180, 255]),
    }
}

fn channel_scale(mapper: &ScrollProgressMapper, channel: ScrollChannel) -> f64 {
    let (lo, hi) = channel.ramp(mapper.config()).output_bounds();
    let m = lo.abs().max(hi.abs());
    if m > 0.0 { m } else { 1.0 }
}

/// Render the chart. Zero dimensions are rejected.
#[tracing::instrument(skip(mapper))]
pub fn render_chart(
    mapper: &ScrollProgressMapper,
    width: u32,
    height: u32,
) -> ParallaxResult<RgbaImage> {
    if width < 2 || height < 2 {
        return Err(ParallaxError::validation(
            "chart must be at least 2x2 pixels",
        ));
    }
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);
    let max_y = f64::from(height - 1);
    // Normalized values live in [-1, 1]; 0 sits at mid-height.
    let row_of = |v: f64| -> u32 { ((1.0 - v) * 0.5 * max_y).round().clamp(0.0, max_y) as u32 };

    let zero_row = row_of(0.0);
    for x in 0..width {
        img.put_pixel(x, zero_row, AXIS);
    }

    let hide_at = mapper.config().header_hide_at;
    let threshold_x = (hide_at * f64::from(width - 1)).round() as u32;
    for y in 0..height {
        img.put_pixel(threshold_x.min(width - 1), y, THRESHOLD);
    }

    for channel in ScrollChannel::ALL {
        let color = channel_color(channel);
        let scale = channel_scale(mapper, channel);
        let mut prev: Option<u32> = None;
        for x in 0..width {
            let p = f64::from(x) / f64::from(width - 1);
            let row = row_of(mapper.channel(channel, p) / scale);
            // Fill vertical gaps so steep segments stay connected.
            let (a, b) = match prev {
                Some(r) if r < row => (r, row),
                Some(r) => (row, r),
                None => (row, row),
            };
            for y in a..=b {
                img.put_pixel(x, y, color);
            }
            prev = Some(row);
        }
    }
    Ok(img)
}

pub fn save_chart(
    mapper: &ScrollProgressMapper,
    width: u32,
    height: u32,
    out: &Path,
) -> ParallaxResult<()> {
    let img = render_chart(mapper, width, height)?;
    img.save(out).map_err(|e| {
        ParallaxError::Other(
            anyhow::Error::new(e).context(format!("write chart '{}'", out.display())),
        )
    })?;
    tracing::debug!(path = %out.display(), width, height, "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/chart.rs"]
mod tests;
