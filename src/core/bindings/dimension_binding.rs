use crate::core::data::pixel_context::PixelContext;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Source of one real-valued component of `z0` or `c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DimensionBinding {
    PlaneX,
    PlaneY,
    Time,
    Constant(f64),
}

impl DimensionBinding {
    #[inline]
    #[must_use]
    pub fn resolve(self, ctx: &PixelContext) -> f64 {
        match self {
            Self::PlaneX => ctx.plane_x,
            Self::PlaneY => ctx.plane_y,
            Self::Time => ctx.time,
            Self::Constant(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionBindingParseError {
    Empty,
    NonFinite(String),
    Unrecognised(String),
}

impl fmt::Display for DimensionBindingParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "binding must not be empty"),
            Self::NonFinite(text) => write!(f, "binding constant must be finite: {:?}", text),
            Self::Unrecognised(text) => {
                write!(f, "binding must be x, y, time or a number: {:?}", text)
            }
        }
    }
}

impl Error for DimensionBindingParseError {}

impl FromStr for DimensionBinding {
    type Err = DimensionBindingParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(DimensionBindingParseError::Empty);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "x" => return Ok(Self::PlaneX),
            "y" => return Ok(Self::PlaneY),
            "t" | "time" => return Ok(Self::Time),
            _ => {}
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| DimensionBindingParseError::Unrecognised(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(DimensionBindingParseError::NonFinite(trimmed.to_string()));
        }

        Ok(Self::Constant(value))
    }
}

impl fmt::Display for DimensionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaneX => write!(f, "x"),
            Self::PlaneY => write!(f, "y"),
            Self::Time => write!(f, "time"),
            Self::Constant(value) => write!(f, "{}", value),
        }
    }
}
