use crate::{
    animation::ease::Ease,
    foundation::error::{ParallaxError, ParallaxResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for kurbo::Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        kurbo::Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Piecewise-linear map from sorted input breakpoints to output values.
///
/// Outside the breakpoints the ramp holds its end values; it never extrapolates. A valid
/// ramp has at least two breakpoints, matching lengths, finite values and non-decreasing
/// inputs. Every constructor (including deserialization) enforces this, so sampling is total.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RampRepr")]
pub struct Ramp {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

#[derive(serde::Deserialize)]
struct RampRepr {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl TryFrom<RampRepr> for Ramp {
    type Error = ParallaxError;

    fn try_from(repr: RampRepr) -> ParallaxResult<Self> {
        Self::new(repr.inputs, repr.outputs)
    }
}

impl Ramp {
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> ParallaxResult<Self> {
        let ramp = Self { inputs, outputs };
        ramp.validate()?;
        Ok(ramp)
    }

    /// Two-point ramp `[x0, x1] -> [y0, y1]`.
    pub fn linear(x0: f64, x1: f64, y0: f64, y1: f64) -> ParallaxResult<Self> {
        Self::new(vec![x0, x1], vec![y0, y1])
    }

    /// Literal breakpoints known to be valid at the call site.
    pub(crate) fn fixed<const N: usize>(inputs: [f64; N], outputs: [f64; N]) -> Self {
        debug_assert!(N >= 2 && inputs.windows(2).all(|w| w[0] <= w[1]));
        Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        }
    }

    pub fn validate(&self) -> ParallaxResult<()> {
        if self.inputs.len() < 2 {
            return Err(ParallaxError::validation(
                "Ramp must have at least two breakpoints",
            ));
        }
        if self.inputs.len() != self.outputs.len() {
            return Err(ParallaxError::validation(format!(
                "Ramp has {} inputs but {} outputs",
                self.inputs.len(),
                self.outputs.len()
            )));
        }
        if !self
            .inputs
            .iter()
            .chain(self.outputs.iter())
            .all(|v| v.is_finite())
        {
            return Err(ParallaxError::validation("Ramp values must be finite"));
        }
        if !self.inputs.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ParallaxError::validation(
                "Ramp inputs must be sorted ascending",
            ));
        }
        Ok(())
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Smallest and largest output value.
    pub fn output_bounds(&self) -> (f64, f64) {
        self.outputs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    pub fn sample(&self, x: f64) -> f64 {
        self.sample_eased(x, Ease::Linear)
    }

    /// Sample with `ease` applied to the local position inside each segment.
    pub fn sample_eased(&self, x: f64, ease: Ease) -> f64 {
        let last = self.inputs.len() - 1;
        let x = if x.is_nan() { self.inputs[0] } else { x };

        let idx = self.inputs.partition_point(|&k| k <= x);
        if idx == 0 {
            return self.outputs[0];
        }
        if idx > last {
            return self.outputs[last];
        }

        let (x0, x1) = (self.inputs[idx - 1], self.inputs[idx]);
        let span = x1 - x0;
        if span <= 0.0 {
            return self.outputs[idx - 1];
        }

        let t = ((x - x0) / span).clamp(0.0, 1.0);
        f64::lerp(&self.outputs[idx - 1], &self.outputs[idx], ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ramp.rs"]
mod tests;
