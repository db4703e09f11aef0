use crate::core::actions::paint_step::ports::display_surface::DisplaySurface;
use crate::core::data::colour::Colour;
use crate::core::data::frame_view::BYTES_PER_PIXEL;
use crate::presenters::surface::device_span;

/// Owned RGB8 surface for headless rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbCanvas {
    width: u32,
    height: u32,
    scale: u32,
    bytes: Vec<u8>,
}

impl RgbCanvas {
    /// A black canvas showing a `width` x `height` logical frame at `scale`
    /// device pixels per logical pixel.
    #[must_use]
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        let scale = scale.max(1);
        let width = width.saturating_mul(scale);
        let height = height.saturating_mul(scale);

        Self {
            width,
            height,
            scale,
            bytes: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
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
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Colour of the device pixel at `(x, y)`.
    #[must_use]
    pub fn colour_at(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Colour::from_rgb_slice(&self.bytes[offset..offset + BYTES_PER_PIXEL])
    }
}

impl DisplaySurface for RgbCanvas {
    fn fill_flat_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        let Some((cols, rows)) =
            device_span(x, y, width, height, self.scale, self.width, self.height)
        else {
            return;
        };

        let pixel = [colour.r, colour.g, colour.b];
        let stride = self.width as usize * BYTES_PER_PIXEL;

        for row in rows {
            let start = row * stride + cols.start * BYTES_PER_PIXEL;
            let end = row * stride + cols.end * BYTES_PER_PIXEL;

            for dst in self.bytes[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                dst.copy_from_slice(&pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::paint_step::paint_step::paint_step;
    use crate::core::data::frame_view::FrameView;

    #[test]
    fn test_new_canvas_is_black_and_scaled() {
        let canvas = RgbCanvas::new(3, 2, 2);

        assert_eq!((canvas.width(), canvas.height()), (6, 4));
        assert_eq!(canvas.bytes().len(), 6 * 4 * 3);
        assert_eq!(canvas.colour_at(5, 3), Some(Colour::BLACK));
        assert_eq!(canvas.colour_at(6, 0), None);
    }

    #[test]
    fn test_painted_pass_fills_whole_canvas() {
        #[rustfmt::skip]
        let bytes = [
            1, 1, 1,  2, 2, 2,  3, 3, 3,
            4, 4, 4,  5, 5, 5,  6, 6, 6,
            7, 7, 7,  8, 8, 8,  9, 9, 9,
        ];
        let frame = FrameView::new(3, 3, &bytes).unwrap();
        let mut canvas = RgbCanvas::new(3, 3, 1);

        paint_step(&mut canvas, &frame, 2);

        assert_eq!(canvas.colour_at(1, 1), Some(Colour::new(1, 1, 1)));
        assert_eq!(canvas.colour_at(2, 0), Some(Colour::new(3, 3, 3)));
        assert_eq!(canvas.colour_at(0, 2), Some(Colour::new(7, 7, 7)));
        assert_eq!(canvas.colour_at(2, 2), Some(Colour::new(9, 9, 9)));
    }

    #[test]
    fn test_fill_is_scaled_to_device_pixels() {
        let mut canvas = RgbCanvas::new(2, 2, 3);

        canvas.fill_flat_rect(1, 1, 1, 1, Colour::new(5, 6, 7));

        assert_eq!(canvas.colour_at(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.colour_at(3, 3), Some(Colour::new(5, 6, 7)));
        assert_eq!(canvas.colour_at(5, 5), Some(Colour::new(5, 6, 7)));
    }
}
