use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasError {
    ZeroWidth,
    TooWide { width: u32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "canvas width must be greater than zero"),
            Self::TooWide { width } => {
                write!(f, "canvas width {} exceeds the supported maximum of {}", width, MAX_CANVAS_WIDTH_PX)
            }
        }
    }
}

impl Error for CanvasError {}

pub const DEFAULT_CANVAS_WIDTH_PX: u32 = 250;

/// Largest supported side, keeping every pixel coordinate inside `i32`.
pub const MAX_CANVAS_WIDTH_PX: u32 = 1 << 15;

/// A square pixel canvas. Height always equals width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
    width_px: u32,
}

impl Canvas {
    pub fn new(width_px: u32) -> Result<Self, CanvasError> {
        if width_px == 0 {
            return Err(CanvasError::ZeroWidth);
        }

        if width_px > MAX_CANVAS_WIDTH_PX {
            return Err(CanvasError::TooWide { width: width_px });
        }

        Ok(Self { width_px })
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width_px as usize * self.width_px as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let width = self.width_px as i32;

        (0..width).contains(&point.x) && (0..width).contains(&point.y)
    }

    /// Every pixel of the canvas in row-major order.
    pub fn pixels(self) -> impl Iterator<Item = Point> {
        let width = self.width_px as i32;

        (0..width).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_CANVAS_WIDTH_PX,
        }
    }
}
