use crate::foundation::math::sanitize_unit;

/// Normalized scroll position within a tracked container, `0` = start, `1` = end.
///
/// Construction never fails: out-of-range values clamp, `+inf` becomes `1`, and `-inf`/`NaN`
/// become `0`. Deserialization goes through the same normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Top of the tracked container.
    pub const START: Self = Self(0.0);
    /// Bottom of the tracked container.
    pub const END: Self = Self(1.0);

    pub fn new(raw: f64) -> Self {
        Self(sanitize_unit(raw))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Evenly spaced samples from `START` to `END` inclusive (`steps + 1` values).
    ///
    /// A sweep always includes both ends, so `steps` below 1 is treated as 1.
    pub fn sweep(steps: u32) -> impl Iterator<Item = Self> {
        let steps = steps.max(1);
        (0..=steps).map(move |i| Self::new(f64::from(i) / f64::from(steps)))
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
