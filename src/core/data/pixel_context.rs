use crate::core::data::complex::Complex;

/// Per-pixel inputs a dimension binding can draw from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelContext {
    pub plane_x: f64,
    pub plane_y: f64,
    pub time: f64,
}

impl PixelContext {
    #[must_use]
    pub fn new(plane_point: Complex, time: f64) -> Self {
        Self {
            plane_x: plane_point.real,
            plane_y: plane_point.imag,
            time,
        }
    }
}
