use tracing::debug;

use crate::core::data::canvas::Canvas;
use crate::core::data::frame_request::FrameRequest;
use crate::core::data::point::Point;
use crate::core::data::view_window::{ViewWindow, ViewWindowError};
use crate::core::util::pixel_to_plane_point::pixel_to_plane_point;

pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// Session state owned by whoever drives the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub canvas: Canvas,
    pub request: FrameRequest,
    pub zoom_factor: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            request: FrameRequest::default(),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

impl ExplorerConfig {
    /// Centres the window on the clicked pixel and zooms in by `zoom_factor`.
    pub fn zoom_at_pixel(&mut self, pixel: Point) -> Result<(), ViewWindowError> {
        let center = pixel_to_plane_point(pixel, self.canvas, self.request.window);
        let window = self.request.window.zoomed_at(center, self.zoom_factor)?;

        debug!(
            x = pixel.x,
            y = pixel.y,
            center_real = center.real,
            center_imag = center.imag,
            width = window.width(),
            "zoomed view"
        );

        self.request.window = window;
        Ok(())
    }

    pub fn reset_view(&mut self) {
        self.request.window = ViewWindow::default();
    }
}
