use crate::core::data::canvas::Canvas;
use crate::core::data::frame_request::FrameRequest;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub canvas: Canvas,
    pub frame: FrameRequest,
}
