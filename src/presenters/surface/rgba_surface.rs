use crate::core::actions::paint_step::ports::display_surface::DisplaySurface;
use crate::core::data::colour::Colour;
use crate::presenters::surface::{SurfaceSizeError, device_span};

const RGBA_BYTES: usize = 4;

/// Paints into a borrowed RGBA8 frame, such as the one `pixels` hands out.
///
/// Alpha is always written as 255.
pub struct RgbaSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    scale: u32,
}

impl<'a> RgbaSurface<'a> {
    /// `width` and `height` are in device pixels; `scale` is the pixel size.
    pub fn new(
        frame: &'a mut [u8],
        width: u32,
        height: u32,
        scale: u32,
    ) -> Result<Self, SurfaceSizeError> {
        let expected_len = width as usize * height as usize * RGBA_BYTES;

        if frame.len() != expected_len {
            return Err(SurfaceSizeError {
                width,
                height,
                expected_len,
                actual_len: frame.len(),
            });
        }

        Ok(Self {
            frame,
            width,
            height,
            scale: scale.max(1),
        })
    }
}

impl DisplaySurface for RgbaSurface<'_> {
    fn fill_flat_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        let Some((cols, rows)) =
            device_span(x, y, width, height, self.scale, self.width, self.height)
        else {
            return;
        };

        let pixel = [colour.r, colour.g, colour.b, 255];
        let stride = self.width as usize * RGBA_BYTES;

        for row in rows {
            let start = row * stride + cols.start * RGBA_BYTES;
            let end = row * stride + cols.end * RGBA_BYTES;

            for dst in self.frame[start..end].chunks_exact_mut(RGBA_BYTES) {
                dst.copy_from_slice(&pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_frame_length() {
        let mut frame = vec![0; 10];

        let result = RgbaSurface::new(&mut frame, 2, 2, 1);

        assert_eq!(
            result.err(),
            Some(SurfaceSizeError {
                width: 2,
                height: 2,
                expected_len: 16,
                actual_len: 10,
            })
        );
    }

    #[test]
    fn test_fill_writes_opaque_pixels() {
        let mut frame = vec![0; 2 * 2 * 4];
        let mut surface = RgbaSurface::new(&mut frame, 2, 2, 1).unwrap();

        surface.fill_flat_rect(1, 0, 1, 2, Colour::new(10, 20, 30));

        assert_eq!(
            frame,
            vec![
                0, 0, 0, 0, 10, 20, 30, 255, //
                0, 0, 0, 0, 10, 20, 30, 255,
            ]
        );
    }

    #[test]
    fn test_fill_magnifies_by_pixel_size() {
        let mut frame = vec![0; 4 * 2 * 4];
        let mut surface = RgbaSurface::new(&mut frame, 4, 2, 2).unwrap();

        surface.fill_flat_rect(1, 0, 1, 1, Colour::new(9, 9, 9));

        let painted: Vec<usize> = frame
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, pixel)| pixel[3] == 255)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(painted, vec![2, 3, 6, 7]);
    }

    #[test]
    fn test_fill_outside_frame_is_ignored() {
        let mut frame = vec![0; 2 * 2 * 4];
        let mut surface = RgbaSurface::new(&mut frame, 2, 2, 1).unwrap();

        surface.fill_flat_rect(5, 5, 2, 2, Colour::new(1, 1, 1));

        assert!(frame.iter().all(|&byte| byte == 0));
    }
}
