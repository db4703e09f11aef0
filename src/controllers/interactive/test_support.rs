//! Recording doubles shared by the interactive controller tests.

use crate::controllers::interactive::ports::renderer::{Renderer, RendererFactoryPort};
use crate::core::actions::paint_step::ports::display_surface::DisplaySurface;
use crate::core::data::colour::Colour;
use crate::core::data::step_sequence::StepSequence;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererCall {
    ComputeStep(usize),
    Click { row: u32, col: u32 },
    Keydown(u32),
}

pub struct RecordingRenderer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    calls: Vec<RendererCall>,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 3) as usize],
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[RendererCall] {
        &self.calls
    }

    pub fn computed_steps(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RendererCall::ComputeStep(step) => Some(*step),
                _ => None,
            })
            .collect()
    }

    pub fn truncate_pixels(&mut self, len: usize) {
        self.pixels.truncate(len);
    }
}

impl Renderer for RecordingRenderer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn compute_step(&mut self, step: usize) {
        self.calls.push(RendererCall::ComputeStep(step));

        // Encode the pass in the buffer so painted output is traceable.
        let value = step as u8;
        for byte in self.pixels.iter_mut() {
            *byte = value;
        }
    }

    fn click(&mut self, row: u32, col: u32) {
        self.calls.push(RendererCall::Click { row, col });
    }

    fn keydown(&mut self, code: u32) {
        self.calls.push(RendererCall::Keydown(code));
    }
}

#[derive(Debug)]
pub struct BadScene;

impl fmt::Display for BadScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad scene")
    }
}

impl Error for BadScene {}

/// Builds renderers sized by the scene source ("WxH"); anything else fails.
pub struct RecordingRendererFactory;

impl RendererFactoryPort for RecordingRendererFactory {
    type Renderer = RecordingRenderer;
    type Error = BadScene;

    fn create(
        &self,
        scene_source: Option<&str>,
        _steps: &StepSequence,
    ) -> Result<RecordingRenderer, BadScene> {
        let Some(source) = scene_source else {
            return Ok(RecordingRenderer::new(4, 4));
        };

        let (width, height) = source.split_once('x').ok_or(BadScene)?;
        let width = width.parse().map_err(|_| BadScene)?;
        let height = height.parse().map_err(|_| BadScene)?;

        Ok(RecordingRenderer::new(width, height))
    }
}

pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn fill_flat_rect(&mut self, _x: u32, _y: u32, _width: u32, _height: u32, _colour: Colour) {}
}
