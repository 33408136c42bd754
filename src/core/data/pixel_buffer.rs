use crate::core::data::canvas::Canvas;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn canvas_to_buffer_size(canvas: Canvas) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes for a canvas, row-major.
#[derive(Debug)]
pub struct PixelBuffer {
    canvas: Canvas,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(canvas: Canvas, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }
}
