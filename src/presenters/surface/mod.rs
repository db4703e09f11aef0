//! Display surfaces that the painter fills with flat blocks.
//!
//! Both surfaces take rectangles in logical pixels and magnify them by the
//! configured pixel size before writing device pixels.

pub mod rgb_canvas;
pub mod rgba_surface;

use std::error::Error;
use std::fmt;
use std::ops::Range;

pub use rgb_canvas::RgbCanvas;
pub use rgba_surface::RgbaSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSizeError {
    pub width: u32,
    pub height: u32,
    pub expected_len: usize,
    pub actual_len: usize,
}

impl fmt::Display for SurfaceSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "surface of {}x{} needs {} bytes, got {}",
            self.width, self.height, self.expected_len, self.actual_len
        )
    }
}

impl Error for SurfaceSizeError {}

/// Device pixel ranges covered by a logical rectangle, clipped to the device size.
fn device_span(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    scale: u32,
    device_width: u32,
    device_height: u32,
) -> Option<(Range<usize>, Range<usize>)> {
    let clip = |start: u32, len: u32, limit: u32| {
        let from = start.saturating_mul(scale).min(limit);
        let to = start.saturating_add(len).saturating_mul(scale).min(limit);
        (from < to).then_some(from as usize..to as usize)
    };

    Some((
        clip(x, width, device_width)?,
        clip(y, height, device_height)?,
    ))
}
