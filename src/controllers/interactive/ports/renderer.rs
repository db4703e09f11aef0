use crate::core::data::frame_view::{FrameView, FrameViewError};
use crate::core::data::step_sequence::StepSequence;
use std::error::Error;

/// The external renderer that owns the scene and the pixel buffer.
pub trait Renderer {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// RGB8 buffer, row-major from the top-left, `width * height * 3` bytes.
    fn pixels(&self) -> &[u8];

    /// Refines the buffer for pass `step`. Called with increasing steps within a session.
    fn compute_step(&mut self, step: usize);

    fn click(&mut self, row: u32, col: u32);

    fn keydown(&mut self, code: u32);

    fn frame_view(&self) -> Result<FrameView<'_>, FrameViewError> {
        FrameView::new(self.width(), self.height(), self.pixels())
    }
}

pub trait RendererFactoryPort {
    type Renderer: Renderer;
    type Error: Error + Send + Sync + 'static;

    /// Builds a renderer whose passes follow `steps`, the sequence the scheduler
    /// will drive it with.
    fn create(
        &self,
        scene_source: Option<&str>,
        steps: &StepSequence,
    ) -> Result<Self::Renderer, Self::Error>;
}
