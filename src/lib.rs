mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::{CliArgs, ConfigError, DEFAULT_OUTPUT_PATH};
pub use crate::controllers::cli::render_controller::CliRenderController;
pub use crate::controllers::cli::run::run;
pub use crate::controllers::explorer_config::{DEFAULT_ZOOM_FACTOR, ExplorerConfig};
pub use crate::controllers::interactive::{
    FrameData, FrameSink, InteractiveController, RenderEvent, RenderRequest,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::frame_cache::FrameCache;
pub use crate::core::actions::render_frame::render_frame::{
    render_frame, render_frame_cancelable, render_frame_serial,
};
pub use crate::core::bindings::binding_set::DimensionBindingSet;
pub use crate::core::bindings::dimension_binding::{DimensionBinding, DimensionBindingParseError};
pub use crate::core::colour_mapping::teal::{TealColourMap, TealColourMapError};
pub use crate::core::data::canvas::{Canvas, CanvasError, DEFAULT_CANVAS_WIDTH_PX, MAX_CANVAS_WIDTH_PX};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::frame_request::FrameRequest;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_context::PixelContext;
pub use crate::core::data::point::Point;
pub use crate::core::data::view_window::{DEFAULT_TOP_LEFT, DEFAULT_WIDTH, ViewWindow, ViewWindowError};
pub use crate::core::fractals::escape_time::escape::{
    ESCAPE_NORM_SQUARED, EscapeOutcome, evaluate, iterate,
};
pub use crate::core::fractals::escape_time::max_steps::{DEFAULT_MAX_STEPS, MaxSteps, MaxStepsError};
pub use crate::core::util::pixel_to_plane_point::pixel_to_plane_point;

pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};
