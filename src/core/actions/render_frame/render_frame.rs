use std::convert::Infallible;
use std::time::Instant;

use tracing::debug;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
    generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::canvas::Canvas;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::frame_request::FrameRequest;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;

fn into_grid(canvas: Canvas, values: Result<Vec<u32>, Infallible>) -> EscapeGrid {
    let Ok(values) = values;

    EscapeGrid::from_values(canvas, values)
        .unwrap_or_else(|err| unreachable!("pixel scan covers the canvas exactly: {err}"))
}

/// Renders one escape value per pixel, scanning rows in parallel.
pub fn render_frame(canvas: Canvas, request: &FrameRequest) -> EscapeGrid {
    let algorithm = EscapeTimeAlgorithm::new(canvas, request);
    let start = Instant::now();

    let grid = into_grid(canvas, generate_fractal_parallel_rayon(&algorithm));

    debug!(
        canvas_width = canvas.width_px(),
        max_steps = request.max_steps.get(),
        time = request.time,
        animated = request.bindings.uses_time(),
        elapsed = ?start.elapsed(),
        "rendered frame"
    );

    grid
}

/// Single-threaded reference scan, identical output to [`render_frame`].
pub fn render_frame_serial(canvas: Canvas, request: &FrameRequest) -> EscapeGrid {
    let algorithm = EscapeTimeAlgorithm::new(canvas, request);

    into_grid(canvas, generate_fractal_serial(&algorithm))
}

/// Like [`render_frame`] but gives up as soon as `cancel` reports true.
pub fn render_frame_cancelable<C: CancelToken>(
    canvas: Canvas,
    request: &FrameRequest,
    cancel: &C,
) -> Result<EscapeGrid, Cancelled> {
    let algorithm = EscapeTimeAlgorithm::new(canvas, request);
    let start = Instant::now();

    let values = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel).map_err(|e| match e {
        GenerateFractalError::Cancelled(cancelled) => {
            debug!(elapsed = ?start.elapsed(), "frame cancelled");
            cancelled
        }
        GenerateFractalError::Algorithm(never) => match never {},
    })?;

    debug!(
        canvas_width = canvas.width_px(),
        max_steps = request.max_steps.get(),
        elapsed = ?start.elapsed(),
        "rendered frame"
    );

    Ok(into_grid(canvas, Ok(values)))
}
