use crate::controllers::interactive::ports::renderer::Renderer;
use crate::core::data::frame_view::BYTES_PER_PIXEL;
use crate::core::data::step_sequence::StepSequence;
use crate::renderers::discs::key_codes::{
    KEY_DOWN, KEY_I, KEY_K, KEY_L, KEY_LEFT, KEY_M, KEY_O, KEY_P, KEY_RIGHT, KEY_UP,
};
use crate::renderers::discs::scene::Scene;
use log::{debug, info};
use rayon::prelude::*;

const MOVE_DISTANCE: f64 = 4.0;
const RESIZE_AMOUNT: f64 = 2.0;
const MIN_RADIUS: f64 = 1.0;

enum Edit {
    Move { dx: f64, dy: f64 },
    Resize(f64),
}

fn edit_for_key(code: u32) -> Option<Edit> {
    let edit = match code {
        KEY_K | KEY_LEFT => Edit::Move {
            dx: -MOVE_DISTANCE,
            dy: 0.0,
        },
        KEY_M | KEY_RIGHT => Edit::Move {
            dx: MOVE_DISTANCE,
            dy: 0.0,
        },
        KEY_O | KEY_UP => Edit::Move {
            dx: 0.0,
            dy: -MOVE_DISTANCE,
        },
        KEY_L | KEY_DOWN => Edit::Move {
            dx: 0.0,
            dy: MOVE_DISTANCE,
        },
        KEY_I => Edit::Resize(RESIZE_AMOUNT),
        KEY_P => Edit::Resize(-RESIZE_AMOUNT),
        _ => return None,
    };

    Some(edit)
}

/// Renders a [`Scene`] one refinement pass at a time.
///
/// Pass `i` shades only the samples whose first block origin falls in pass `i`,
/// so a full session computes each pixel once.
pub struct DiscRenderer {
    scene: Scene,
    steps: StepSequence,
    pixels: Vec<u8>,
    selected: Option<usize>,
}

impl DiscRenderer {
    /// `scene` must already be validated.
    #[must_use]
    pub fn new(scene: Scene, steps: StepSequence) -> Self {
        let len = scene.width as usize * scene.height as usize * BYTES_PER_PIXEL;

        Self {
            scene,
            steps,
            pixels: vec![0; len],
            selected: None,
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl Renderer for DiscRenderer {
    fn width(&self) -> u32 {
        self.scene.width
    }

    fn height(&self) -> u32 {
        self.scene.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn compute_step(&mut self, step: usize) {
        if step >= self.steps.len() {
            return;
        }

        let scene = &self.scene;
        let steps = &self.steps;
        let selected = self.selected;
        let row_len = scene.width as usize * BYTES_PER_PIXEL;

        self.pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, line)| {
                let row = row as u32;

                for (col, pixel) in line.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    let col = col as u32;

                    if steps.first_sampled_step(row, col) != step {
                        continue;
                    }

                    let colour = scene.shade(row, col, selected);
                    pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
                }
            });
    }

    fn click(&mut self, row: u32, col: u32) {
        self.selected = self.scene.pick(row, col);

        match self.selected {
            Some(index) => info!("selected disc {}", index),
            None => debug!("selection cleared"),
        }
    }

    fn keydown(&mut self, code: u32) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(edit) = edit_for_key(code) else {
            debug!("ignoring key {}", code);
            return;
        };
        let Some(disc) = self.scene.discs.get_mut(index) else {
            return;
        };

        match edit {
            Edit::Move { dx, dy } => {
                disc.x += dx;
                disc.y += dy;
            }
            Edit::Resize(amount) => {
                disc.radius = (disc.radius + amount).max(MIN_RADIUS);
            }
        }

        debug!(
            "disc {} now at ({}, {}) radius {}",
            index, disc.x, disc.y, disc.radius
        );
    }
}
