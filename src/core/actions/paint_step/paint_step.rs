use crate::core::actions::paint_step::ports::display_surface::DisplaySurface;
use crate::core::data::frame_view::FrameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintReport {
    pub block_size: u32,
    pub blocks: usize,
}

/// Paints one refinement pass as a mosaic of flat blocks.
///
/// Each block takes the colour of the sample at its top-left origin. Blocks on the
/// right and bottom edges are clipped to the frame when the dimensions are not a
/// multiple of `block_size`, so every pass covers the whole frame.
pub fn paint_step<S>(surface: &mut S, frame: &FrameView<'_>, block_size: u32) -> PaintReport
where
    S: DisplaySurface + ?Sized,
{
    let mut blocks = 0;

    if block_size == 0 {
        return PaintReport { block_size, blocks };
    }

    let width = frame.width();
    let height = frame.height();

    for row in (0..height).step_by(block_size as usize) {
        let block_height = block_size.min(height - row);

        for col in (0..width).step_by(block_size as usize) {
            let Some(colour) = frame.colour_at(row, col) else {
                continue;
            };

            let block_width = block_size.min(width - col);
            surface.fill_flat_rect(col, row, block_width, block_height, colour);
            blocks += 1;
        }
    }

    PaintReport { block_size, blocks }
}
