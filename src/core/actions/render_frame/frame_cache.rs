use std::sync::Arc;

use tracing::trace;

use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::canvas::Canvas;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::frame_request::FrameRequest;

/// Remembers the last rendered frame so an unchanged request skips the scan.
#[derive(Debug, Default)]
pub struct FrameCache {
    last: Option<(Canvas, FrameRequest, Arc<EscapeGrid>)>,
}

impl FrameCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, canvas: Canvas, request: &FrameRequest) -> Arc<EscapeGrid> {
        if let Some((cached_canvas, cached_request, grid)) = &self.last {
            if *cached_canvas == canvas && cached_request == request {
                trace!("frame cache hit");
                return Arc::clone(grid);
            }
        }

        let grid = Arc::new(render_frame(canvas, request));
        self.last = Some((canvas, *request, Arc::clone(&grid)));

        grid
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
