use crate::core::bindings::binding_set::DimensionBindingSet;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::escape_time::max_steps::MaxSteps;

/// Everything besides the canvas that determines a frame.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FrameRequest {
    pub window: ViewWindow,
    pub bindings: DimensionBindingSet,
    pub time: f64,
    pub max_steps: MaxSteps,
}
