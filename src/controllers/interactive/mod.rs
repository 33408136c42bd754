//! Background rendering for interactive exploration.
//!
//! Callers submit a [`RenderRequest`] whenever the view changes. A single
//! worker renders the newest request, abandons a frame as soon as a newer
//! one arrives, and hands finished frames to a [`FrameSink`].

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use events::render_event::RenderEvent;
pub use ports::frame_sink::FrameSink;
