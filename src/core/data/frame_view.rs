use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn frame_size_in_bytes(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameViewError {
    BoundsMismatch {
        width: u32,
        height: u32,
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                width,
                height,
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame of {}x{} needs {} bytes but buffer holds {}",
                    width, height, expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for FrameViewError {}

/// Read-only view of a renderer's RGB8 buffer, row-major from the top-left.
///
/// The view borrows the renderer, so it cannot outlive the tick that produced it.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    width: u32,
    height: u32,
    bytes: &'a [u8],
}

impl<'a> FrameView<'a> {
    pub fn new(width: u32, height: u32, bytes: &'a [u8]) -> Result<Self, FrameViewError> {
        let expected_size = frame_size_in_bytes(width, height);

        if expected_size != bytes.len() {
            return Err(FrameViewError::BoundsMismatch {
                width,
                height,
                expected_size,
                buffer_size: bytes.len(),
            });
        }

        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[must_use]
    pub fn colour_at(&self, row: u32, col: u32) -> Option<Colour> {
        if row >= self.height || col >= self.width {
            return None;
        }

        let index = (row as usize * self.width as usize + col as usize) * BYTES_PER_PIXEL;
        Colour::from_rgb_slice(&self.bytes[index..index + BYTES_PER_PIXEL])
    }
}
