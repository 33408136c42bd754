use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::max_steps::MaxSteps;

/// `|z|² > 4` means `|z| > 2`, after which the quadratic map diverges.
pub const ESCAPE_NORM_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// Number of completed iterations before `|z|²` exceeded the threshold.
    Escaped(u32),
    Bounded,
}

impl EscapeOutcome {
    /// Collapses the outcome to the per-pixel integer the colour mapping consumes.
    #[inline]
    #[must_use]
    pub fn escape_time(self, max_steps: MaxSteps) -> u32 {
        match self {
            Self::Escaped(step) => step,
            Self::Bounded => max_steps.bounded_sentinel(),
        }
    }
}

/// Runs `z ← z² + c` from `z0` for at most `max_steps` iterations.
#[inline]
#[must_use]
pub fn evaluate(z0: Complex, c: Complex, max_steps: MaxSteps) -> EscapeOutcome {
    let mut z = z0;

    for step in 0..max_steps.get() {
        if z.norm_squared() > ESCAPE_NORM_SQUARED {
            return EscapeOutcome::Escaped(step);
        }
        z = z * z + c;
    }

    EscapeOutcome::Bounded
}

/// Escape time of `(z0, c)`, or `max_steps / 8` if the orbit stays bounded.
#[inline]
#[must_use]
pub fn iterate(z0: Complex, c: Complex, max_steps: MaxSteps) -> u32 {
    evaluate(z0, c, max_steps).escape_time(max_steps)
}
