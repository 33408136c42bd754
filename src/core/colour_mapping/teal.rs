use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::max_steps::MaxSteps;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum TealColourMapError {
    StepsExceedMax { steps: u32, max_steps: u32 },
}

impl fmt::Display for TealColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepsExceedMax { steps, max_steps } => {
                write!(f, "escape time {} exceeds maximum steps {}", steps, max_steps)
            }
        }
    }
}

impl Error for TealColourMapError {}

/// `rgb(0, steps / 2, steps / 2)`: brighter teal the longer a point takes to escape.
#[derive(Debug)]
pub struct TealColourMap {
    max_steps: MaxSteps,
}

impl ColourMap for TealColourMap {
    type Failure = TealColourMapError;

    fn map(&self, steps: u32) -> Result<Colour, Self::Failure> {
        if steps > self.max_steps.get() {
            return Err(TealColourMapError::StepsExceedMax {
                steps,
                max_steps: self.max_steps.get(),
            });
        }

        let intensity = u8::try_from(steps / 2).unwrap_or(u8::MAX);

        Ok(Colour {
            r: 0,
            g: intensity,
            b: intensity,
        })
    }

    fn display_name(&self) -> &str {
        "Teal"
    }
}

impl TealColourMap {
    #[must_use]
    pub fn new(max_steps: MaxSteps) -> Self {
        Self { max_steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_steps_is_black() {
        let map = TealColourMap::new(MaxSteps::default());

        assert_eq!(map.map(0), Ok(Colour { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_bounded_sentinel_is_mid_teal() {
        let map = TealColourMap::new(MaxSteps::default());

        assert_eq!(map.map(64), Ok(Colour { r: 0, g: 32, b: 32 }));
    }

    #[test]
    fn test_halving_truncates() {
        let map = TealColourMap::new(MaxSteps::default());

        assert_eq!(map.map(5), Ok(Colour { r: 0, g: 2, b: 2 }));
        assert_eq!(map.map(511), Ok(Colour { r: 0, g: 255, b: 255 }));
    }

    #[test]
    fn test_large_budgets_saturate() {
        let map = TealColourMap::new(MaxSteps::new(2048).unwrap());

        assert_eq!(map.map(2000), Ok(Colour { r: 0, g: 255, b: 255 }));
    }

    #[test]
    fn test_steps_above_budget_fail() {
        let map = TealColourMap::new(MaxSteps::default());

        assert_eq!(
            map.map(513),
            Err(TealColourMapError::StepsExceedMax {
                steps: 513,
                max_steps: 512
            })
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(TealColourMap::new(MaxSteps::default()).display_name(), "Teal");
    }
}
