use crate::core::data::colour::Colour;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const MAX_DIMENSION: u32 = 8192;

const DEFAULT_BACKGROUND: [u8; 3] = [16, 24, 48];
const RIM_DARKENING: f64 = 0.6;
const SELECTED_BRIGHTENING: f64 = 1.3;

#[derive(Debug)]
pub enum SceneError {
    Parse(serde_json::Error),
    InvalidDimensions { width: u32, height: u32 },
    InvalidDisc { index: usize, radius: f64 },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "scene is not valid JSON: {}", err),
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "scene size {}x{} must be between 1x1 and {}x{}",
                    width, height, MAX_DIMENSION, MAX_DIMENSION
                )
            }
            Self::InvalidDisc { index, radius } => {
                write!(f, "disc {} has non-positive radius {}", index, radius)
            }
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

fn default_background() -> [u8; 3] {
    DEFAULT_BACKGROUND
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub colour: [u8; 3],
}

impl Disc {
    fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((x - self.x).powi(2) + (y - self.y).powi(2)).sqrt()
    }
}

/// Flat discs over a background, listed back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default)]
    pub discs: Vec<Disc>,
}

impl Scene {
    pub fn parse(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let valid_dimension = |value: u32| (1..=MAX_DIMENSION).contains(&value);

        if !valid_dimension(self.width) || !valid_dimension(self.height) {
            return Err(SceneError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        for (index, disc) in self.discs.iter().enumerate() {
            if !(disc.radius > 0.0 && disc.radius.is_finite()) {
                return Err(SceneError::InvalidDisc {
                    index,
                    radius: disc.radius,
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn sample() -> Self {
        Self {
            width: 320,
            height: 240,
            background: DEFAULT_BACKGROUND,
            discs: vec![
                Disc {
                    x: 90.0,
                    y: 120.0,
                    radius: 60.0,
                    colour: [220, 60, 50],
                },
                Disc {
                    x: 180.0,
                    y: 100.0,
                    radius: 45.0,
                    colour: [60, 180, 90],
                },
                Disc {
                    x: 240.0,
                    y: 170.0,
                    radius: 50.0,
                    colour: [70, 110, 230],
                },
                Disc {
                    x: 150.0,
                    y: 190.0,
                    radius: 25.0,
                    colour: [240, 200, 60],
                },
            ],
        }
    }

    /// Index of the topmost disc covering the centre of pixel `(row, col)`.
    #[must_use]
    pub fn pick(&self, row: u32, col: u32) -> Option<usize> {
        let (x, y) = pixel_centre(row, col);

        self.discs
            .iter()
            .rposition(|disc| disc.distance_to(x, y) <= disc.radius)
    }

    #[must_use]
    pub fn shade(&self, row: u32, col: u32, selected: Option<usize>) -> Colour {
        let Some(index) = self.pick(row, col) else {
            return Colour::from(self.background);
        };

        let disc = &self.discs[index];
        let (x, y) = pixel_centre(row, col);
        let falloff = 1.0 - RIM_DARKENING * (disc.distance_to(x, y) / disc.radius);
        let colour = Colour::from(disc.colour).scaled(falloff);

        if selected == Some(index) {
            colour.scaled(SELECTED_BRIGHTENING)
        } else {
            colour
        }
    }
}

fn pixel_centre(row: u32, col: u32) -> (f64, f64) {
    (f64::from(col) + 0.5, f64::from(row) + 0.5)
}
