use crate::core::data::canvas::Canvas;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeGridError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for EscapeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "escape grid expects {} values for its canvas but got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for EscapeGridError {}

/// One escape value per canvas pixel, stored row-major (`index = y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    canvas: Canvas,
    values: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_values(canvas: Canvas, values: Vec<u32>) -> Result<Self, EscapeGridError> {
        if values.len() != canvas.pixel_count() {
            return Err(EscapeGridError::SizeMismatch {
                expected: canvas.pixel_count(),
                actual: values.len(),
            });
        }

        Ok(Self { canvas, values })
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.canvas.width_px()
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u32> {
        if !self.canvas.contains_point(pixel) {
            return None;
        }

        let index = pixel.y as usize * self.canvas.width_px() as usize + pixel.x as usize;

        self.values.get(index).copied()
    }

    /// One slice per canvas row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.values.chunks(self.canvas.width_px() as usize)
    }
}
