use crate::core::data::step_sequence::{StepSequence, StepSequenceError};
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

pub const STEPS_VAR: &str = "PROGRESSIVE_STEPS";
pub const PIXEL_SIZE_VAR: &str = "PROGRESSIVE_PIXEL_SIZE";
pub const SCENE_VAR: &str = "PROGRESSIVE_SCENE";

const DEFAULT_PIXEL_SIZE: u32 = 1;
/// Largest accepted pixel size; keeps magnified canvases within `u32` for any valid scene.
pub const MAX_PIXEL_SIZE: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Steps(StepSequenceError),
    PixelSize { value: String, source: ParseIntError },
    ZeroPixelSize,
    PixelSizeTooLarge { value: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(err) => write!(f, "{}: {}", STEPS_VAR, err),
            Self::PixelSize { value, source } => {
                write!(f, "{}: invalid value {:?}: {}", PIXEL_SIZE_VAR, value, source)
            }
            Self::ZeroPixelSize => write!(f, "{}: pixel size must be positive", PIXEL_SIZE_VAR),
            Self::PixelSizeTooLarge { value } => write!(
                f,
                "{}: pixel size {} exceeds the maximum of {}",
                PIXEL_SIZE_VAR, value, MAX_PIXEL_SIZE
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Steps(err) => Some(err),
            Self::PixelSize { source, .. } => Some(source),
            Self::ZeroPixelSize | Self::PixelSizeTooLarge { .. } => None,
        }
    }
}

impl From<StepSequenceError> for ConfigError {
    fn from(err: StepSequenceError) -> Self {
        Self::Steps(err)
    }
}

/// Deployment settings for a progressive display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub steps: StepSequence,
    /// Display pixels per logical pixel.
    pub pixel_size: u32,
    pub scene_path: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            steps: StepSequence::default(),
            pixel_size: DEFAULT_PIXEL_SIZE,
            scene_path: None,
        }
    }
}

impl DisplayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(steps) = lookup(STEPS_VAR) {
            config.steps = steps.parse()?;
        }

        if let Some(value) = lookup(PIXEL_SIZE_VAR) {
            let pixel_size = value
                .trim()
                .parse::<u32>()
                .map_err(|source| ConfigError::PixelSize {
                    value: value.clone(),
                    source,
                })?;

            if pixel_size == 0 {
                return Err(ConfigError::ZeroPixelSize);
            }

            if pixel_size > MAX_PIXEL_SIZE {
                return Err(ConfigError::PixelSizeTooLarge { value: pixel_size });
            }

            config.pixel_size = pixel_size;
        }

        config.scene_path = lookup(SCENE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
