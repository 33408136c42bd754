pub mod canvas;
pub mod colour;
pub mod complex;
pub mod escape_grid;
pub mod frame_request;
pub mod pixel_buffer;
pub mod pixel_context;
pub mod point;
pub mod view_window;
