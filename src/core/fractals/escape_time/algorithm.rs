use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::bindings::binding_set::DimensionBindingSet;
use crate::core::data::canvas::Canvas;
use crate::core::data::frame_request::FrameRequest;
use crate::core::data::pixel_context::PixelContext;
use crate::core::data::point::Point;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::escape_time::escape::iterate;
use crate::core::fractals::escape_time::max_steps::MaxSteps;
use crate::core::util::pixel_to_plane_point::pixel_to_plane_point;
use std::convert::Infallible;

/// Per-pixel pipeline: pixel -> plane point -> bindings -> `(z0, c)` -> escape time.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    canvas: Canvas,
    window: ViewWindow,
    bindings: DimensionBindingSet,
    time: f64,
    max_steps: MaxSteps,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    #[inline]
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self.escape_time(pixel))
    }

    fn canvas(&self) -> Canvas {
        self.canvas
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(canvas: Canvas, request: &FrameRequest) -> Self {
        Self {
            canvas,
            window: request.window,
            bindings: request.bindings,
            time: request.time,
            max_steps: request.max_steps,
        }
    }

    #[inline]
    #[must_use]
    pub fn escape_time(&self, pixel: Point) -> u32 {
        let plane_point = pixel_to_plane_point(pixel, self.canvas, self.window);
        let ctx = PixelContext::new(plane_point, self.time);

        let z0 = self.bindings.resolve_z0(&ctx);
        let c = self.bindings.resolve_c(&ctx);

        iterate(z0, c, self.max_steps)
    }
}
