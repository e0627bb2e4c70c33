use crate::foundation::{
    error::{ParallaxError, ParallaxResult},
    math::sanitize_seconds,
};

/// Damped harmonic oscillator released from rest.
///
/// Evaluated in closed form, so sampling at any time is exact and order-independent.
///
/// Parameters are private so that every spring in circulation has passed [`Spring::validate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SpringRepr")]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

#[derive(serde::Deserialize)]
struct SpringRepr {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl TryFrom<SpringRepr> for Spring {
    type Error = ParallaxError;

    fn try_from(repr: SpringRepr) -> ParallaxResult<Self> {
        Self::new(repr.stiffness, repr.damping, repr.mass)
    }
}

impl Default for Spring {
    /// Spring used for transforms that only name a damping (`type: 'spring'`).
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    /// Implicit spring for `x`/`y` transitions without an explicit type.
    pub const TRANSFORM: Self = Self {
        stiffness: 500.0,
        damping: 25.0,
        mass: 1.0,
    };

    pub fn new(stiffness: f64, damping: f64, mass: f64) -> ParallaxResult<Self> {
        let spring = Self {
            stiffness,
            damping,
            mass,
        };
        spring.validate()?;
        Ok(spring)
    }

    /// Literal parameters known to be valid at the call site.
    pub(crate) const fn fixed(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn with_damping(damping: f64) -> ParallaxResult<Self> {
        Self::new(Self::default().stiffness, damping, Self::default().mass)
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn validate(&self) -> ParallaxResult<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ParallaxError::validation("Spring stiffness must be > 0"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ParallaxError::validation("Spring mass must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ParallaxError::validation("Spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio; `1.0` is critically damped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Position at `t` seconds for a spring released at `from` and pulled toward `to`.
    pub fn sample(&self, from: f64, to: f64, t: f64) -> f64 {
        let t = sanitize_seconds(t);
        let x0 = from - to;
        if t == 0.0 || x0 == 0.0 {
            return from;
        }
        if !t.is_finite() {
            return to;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let x = if (zeta - 1.0).abs() < 1e-9 {
            (-w0 * t).exp() * (x0 + w0 * x0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            envelope * (x0 * (wd * t).cos() + (zeta * w0 * x0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = -r1 * x0 / (r2 - r1);
            let c1 = x0 - c2;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        };
        to + x
    }
}

/// A spring from `from` to `to` that starts after `delay_s`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringMotion {
    pub from: f64,
    pub to: f64,
    pub delay_s: f64,
    pub spring: Spring,
}

impl SpringMotion {
    pub fn new(from: f64, to: f64, spring: Spring) -> Self {
        Self {
            from,
            to,
            delay_s: 0.0,
            spring,
        }
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay_s = secs;
        self
    }

    /// Same spring travelling the other way.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..self
        }
    }

    pub fn sample(&self, elapsed_s: f64) -> f64 {
        let local = sanitize_seconds(elapsed_s) - self.delay_s.max(0.0);
        if local <= 0.0 {
            return self.from;
        }
        self.spring.sample(self.from, self.to, local)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
