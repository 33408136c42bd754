use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_STEPS: u32 = 512;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaxStepsError {
    Zero,
}

impl fmt::Display for MaxStepsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "Maximum steps must be greater than zero"),
        }
    }
}

impl Error for MaxStepsError {}

/// Iteration budget for the escape-time loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaxSteps(u32);

impl MaxSteps {
    pub fn new(steps: u32) -> Result<Self, MaxStepsError> {
        if steps == 0 {
            return Err(MaxStepsError::Zero);
        }

        Ok(Self(steps))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Value reported for points that never escape.
    #[must_use]
    pub fn bounded_sentinel(self) -> u32 {
        self.0 / 8
    }
}

impl Default for MaxSteps {
    fn default() -> Self {
        Self(DEFAULT_MAX_STEPS)
    }
}
