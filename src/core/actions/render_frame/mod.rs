pub mod frame_cache;
pub mod render_frame;
