use std::sync::Arc;
use std::time::Duration;

use crate::core::data::escape_grid::EscapeGrid;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub grid: Arc<EscapeGrid>,
    pub render_duration: Duration,
}
