use crate::core::data::colour::Colour;

/// A raster target that can be filled with opaque, flat-coloured rectangles.
pub trait DisplaySurface {
    /// Fills `width × height` pixels at `(x, y)`; no blending with what was there.
    fn fill_flat_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour);
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn fill_flat_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        (**self).fill_flat_rect(x, y, width, height, colour);
    }
}
