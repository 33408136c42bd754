use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_TOP_LEFT: Complex = Complex::new(-2.0, 2.0);
pub const DEFAULT_WIDTH: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewWindowError {
    InvalidWidth { width: f64 },
    InvalidTopLeft { top_left: Complex },
    InvalidZoomFactor { zoom_factor: f64 },
}

impl fmt::Display for ViewWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(f, "view window width must be finite and positive: {}", width)
            }
            Self::InvalidTopLeft { top_left } => {
                write!(
                    f,
                    "view window top-left must be finite: {} + {}i",
                    top_left.real, top_left.imag
                )
            }
            Self::InvalidZoomFactor { zoom_factor } => {
                write!(f, "zoom factor must be finite and positive: {}", zoom_factor)
            }
        }
    }
}

impl Error for ViewWindowError {}

/// Zoom factors must be finite and strictly positive.
pub fn validate_zoom_factor(zoom_factor: f64) -> Result<f64, ViewWindowError> {
    if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
        return Err(ViewWindowError::InvalidZoomFactor { zoom_factor });
    }

    Ok(zoom_factor)
}

/// Square region of the complex plane shown on the canvas.
///
/// The imaginary part decreases downwards from `top_left`, so the window
/// spans `[top_left.real, top_left.real + width]` horizontally and
/// `[top_left.imag - width, top_left.imag]` vertically.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewWindow {
    top_left: Complex,
    width: f64,
}

impl ViewWindow {
    pub fn new(top_left: Complex, width: f64) -> Result<Self, ViewWindowError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ViewWindowError::InvalidWidth { width });
        }

        if !top_left.real.is_finite() || !top_left.imag.is_finite() {
            return Err(ViewWindowError::InvalidTopLeft { top_left });
        }

        Ok(Self { top_left, width })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        let half = self.width / 2.0;

        Complex::new(self.top_left.real + half, self.top_left.imag - half)
    }

    /// A new window centred on `center` whose width is divided by `zoom_factor`.
    pub fn zoomed_at(&self, center: Complex, zoom_factor: f64) -> Result<Self, ViewWindowError> {
        let zoom_factor = validate_zoom_factor(zoom_factor)?;
        let width = (1.0 / zoom_factor) * self.width;

        Self::new(
            Complex::new(center.real - width / 2.0, center.imag + width / 2.0),
            width,
        )
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self {
            top_left: DEFAULT_TOP_LEFT,
            width: DEFAULT_WIDTH,
        }
    }
}
