use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
}
