use crate::{
    animation::{
        ease::Ease,
        ramp::{Lerp, Ramp},
    },
    foundation::{
        error::{ParallaxError, ParallaxResult},
        math::sanitize_seconds,
    },
};

/// Duration used when a transition only specifies a delay.
pub const DEFAULT_TWEEN_SECS: f64 = 0.3;

/// Curve used when a transition only specifies a delay.
pub const DEFAULT_TWEEN_EASE: Ease = Ease::CubicBezier(0.25, 0.1, 0.35, 1.0);

/// One-shot transition from `from` to `to`, sampled by seconds since mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub delay_s: f64,
    pub duration_s: f64,
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Default tween: [`DEFAULT_TWEEN_SECS`] with [`DEFAULT_TWEEN_EASE`], no delay.
    ///
    /// Setting an explicit duration does not change the curve; callers that time a
    /// transition themselves pick the ease with [`Tween::ease`].
    pub fn new(from: T, to: T) -> Self {
        Self {
            from,
            to,
            delay_s: 0.0,
            duration_s: DEFAULT_TWEEN_SECS,
            ease: DEFAULT_TWEEN_EASE,
        }
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay_s = secs;
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_s = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Seconds after mount at which the tween reaches `to`.
    pub fn end_s(&self) -> f64 {
        self.delay_s.max(0.0) + self.duration_s.max(0.0)
    }

    pub fn sample(&self, elapsed_s: f64) -> T {
        let local = sanitize_seconds(elapsed_s) - self.delay_s.max(0.0);
        if local <= 0.0 {
            return self.from.clone();
        }
        if self.duration_s <= 0.0 || local >= self.duration_s {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(local / self.duration_s))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    #[default]
    Repeat,
    /// Play forward, then backward (`repeatType: "reverse"`).
    PingPong,
}

/// Endless keyframe loop: `ramp` is laid out over normalized cycle time `[0, 1]`, one pass
/// taking `duration_s`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    ramp: Ramp,
    duration_s: f64,
    mode: LoopMode,
    ease: Ease,
}

impl Cycle {
    pub fn new(ramp: Ramp, duration_s: f64, mode: LoopMode) -> ParallaxResult<Self> {
        if !(duration_s.is_finite() && duration_s > 0.0) {
            return Err(ParallaxError::validation(
                "Cycle duration must be finite and > 0",
            ));
        }
        Ok(Self {
            ramp,
            duration_s,
            mode,
            ease: Ease::EaseInOut,
        })
    }

    /// Loop over a literal ramp whose duration is known to be valid at the call site.
    pub(crate) fn fixed(ramp: Ramp, duration_s: f64, mode: LoopMode) -> Self {
        debug_assert!(duration_s.is_finite() && duration_s > 0.0);
        Self {
            ramp,
            duration_s,
            mode,
            ease: Ease::EaseInOut,
        }
    }

    /// Evenly spaced keyframes over one pass.
    pub fn keyframes(values: &[f64], duration_s: f64, mode: LoopMode) -> ParallaxResult<Self> {
        let n = values.len();
        if n < 2 {
            return Err(ParallaxError::validation(
                "Cycle needs at least two keyframes",
            ));
        }
        let inputs = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        Self::new(Ramp::new(inputs, values.to_vec())?, duration_s, mode)
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Position inside the current pass, in `[0, 1]`.
    pub fn phase(&self, elapsed_s: f64) -> f64 {
        let t = sanitize_seconds(elapsed_s);
        if !t.is_finite() {
            return 0.0;
        }
        match self.mode {
            LoopMode::Repeat => (t % self.duration_s) / self.duration_s,
            LoopMode::PingPong => {
                let period = 2.0 * self.duration_s;
                let pos = t % period;
                if pos <= self.duration_s {
                    pos / self.duration_s
                } else {
                    (period - pos) / self.duration_s
                }
            }
        }
    }

    pub fn sample(&self, elapsed_s: f64) -> f64 {
        self.ramp.sample_eased(self.phase(elapsed_s), self.ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
