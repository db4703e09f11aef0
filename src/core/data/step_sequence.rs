use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSequenceError {
    Empty,
    NonPositive {
        index: usize,
    },
    NotDecreasing {
        index: usize,
        previous: u32,
        current: u32,
    },
    DoesNotEndAtOne {
        last: u32,
    },
    Parse {
        token: String,
        source: ParseIntError,
    },
}

impl fmt::Display for StepSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "step sequence must contain at least one block size"),
            Self::NonPositive { index } => {
                write!(f, "block size at index {} must be positive", index)
            }
            Self::NotDecreasing {
                index,
                previous,
                current,
            } => {
                write!(
                    f,
                    "block sizes must strictly decrease: {} at index {} follows {}",
                    current, index, previous
                )
            }
            Self::DoesNotEndAtOne { last } => {
                write!(f, "step sequence must end at block size 1, ends at {}", last)
            }
            Self::Parse { token, source } => {
                write!(f, "invalid block size {:?}: {}", token, source)
            }
        }
    }
}

impl Error for StepSequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Block sizes of a full refinement session, coarsest first.
///
/// A valid sequence is non-empty, strictly decreasing and finishes at 1, so the
/// last pass always paints every logical pixel individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    block_sizes: Vec<u32>,
}

impl StepSequence {
    pub const DEFAULT_BLOCK_SIZES: &'static [u32] = &[12, 8, 6, 3, 2, 1];
    pub const POWERS_OF_TWO_BLOCK_SIZES: &'static [u32] = &[64, 32, 16, 8, 4, 2, 1];
    pub const ODD_SUBDIVISION_BLOCK_SIZES: &'static [u32] = &[13, 11, 9, 7, 5, 4, 3, 2, 1];

    pub fn new(block_sizes: Vec<u32>) -> Result<Self, StepSequenceError> {
        let Some(&last) = block_sizes.last() else {
            return Err(StepSequenceError::Empty);
        };

        if let Some(index) = block_sizes.iter().position(|&size| size == 0) {
            return Err(StepSequenceError::NonPositive { index });
        }

        for (index, pair) in block_sizes.windows(2).enumerate() {
            if pair[1] >= pair[0] {
                return Err(StepSequenceError::NotDecreasing {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        if last != 1 {
            return Err(StepSequenceError::DoesNotEndAtOne { last });
        }

        Ok(Self { block_sizes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.block_sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.block_sizes.is_empty()
    }

    #[must_use]
    pub fn block_size_at(&self, step: usize) -> Option<u32> {
        self.block_sizes.get(step).copied()
    }

    #[must_use]
    pub fn is_last_step(&self, step: usize) -> bool {
        step + 1 == self.block_sizes.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.block_sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.block_sizes.iter().copied()
    }

    /// Index of the first pass whose block grid has an origin at `(row, col)`.
    ///
    /// Every coordinate has one, because the final block size is 1.
    #[must_use]
    pub fn first_sampled_step(&self, row: u32, col: u32) -> usize {
        self.block_sizes
            .iter()
            .position(|&size| row % size == 0 && col % size == 0)
            .unwrap_or(self.block_sizes.len() - 1)
    }
}

impl Default for StepSequence {
    fn default() -> Self {
        Self {
            block_sizes: Self::DEFAULT_BLOCK_SIZES.to_vec(),
        }
    }
}

impl FromStr for StepSequence {
    type Err = StepSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let block_sizes = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u32>().map_err(|source| StepSequenceError::Parse {
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(block_sizes)
    }
}

impl fmt::Display for StepSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.block_sizes.iter().map(u32::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in [
            StepSequence::DEFAULT_BLOCK_SIZES,
            StepSequence::POWERS_OF_TWO_BLOCK_SIZES,
            StepSequence::ODD_SUBDIVISION_BLOCK_SIZES,
        ] {
            let steps = StepSequence::new(preset.to_vec()).unwrap();
            assert_eq!(steps.as_slice(), preset);
        }
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(StepSequence::new(vec![]), Err(StepSequenceError::Empty));
    }

    #[test]
    fn test_zero_block_size_is_rejected() {
        assert_eq!(
            StepSequence::new(vec![4, 0, 1]),
            Err(StepSequenceError::NonPositive { index: 1 })
        );
    }

    #[test]
    fn test_non_decreasing_sequence_is_rejected() {
        assert_eq!(
            StepSequence::new(vec![8, 8, 1]),
            Err(StepSequenceError::NotDecreasing {
                index: 1,
                previous: 8,
                current: 8
            })
        );
        assert_eq!(
            StepSequence::new(vec![2, 4, 1]),
            Err(StepSequenceError::NotDecreasing {
                index: 1,
                previous: 2,
                current: 4
            })
        );
    }

    #[test]
    fn test_sequence_must_end_at_one() {
        assert_eq!(
            StepSequence::new(vec![8, 4, 2]),
            Err(StepSequenceError::DoesNotEndAtOne { last: 2 })
        );
    }

    #[test]
    fn test_block_size_lookup_and_last_step() {
        let steps = StepSequence::new(vec![12, 8, 6, 3, 2, 1]).unwrap();

        assert_eq!(steps.len(), 6);
        assert_eq!(steps.block_size_at(0), Some(12));
        assert_eq!(steps.block_size_at(5), Some(1));
        assert_eq!(steps.block_size_at(6), None);
        assert!(!steps.is_last_step(4));
        assert!(steps.is_last_step(5));
        assert!(!steps.is_last_step(6));
    }

    #[test]
    fn test_single_step_sequence() {
        let steps = StepSequence::new(vec![1]).unwrap();

        assert!(steps.is_last_step(0));
        assert_eq!(steps.first_sampled_step(7, 3), 0);
    }

    #[test]
    fn test_parse_from_str() {
        let steps: StepSequence = " 64, 32,16,8 ,4,2,1 ".parse().unwrap();
        assert_eq!(steps.as_slice(), StepSequence::POWERS_OF_TWO_BLOCK_SIZES);
        assert_eq!(steps.to_string(), "64,32,16,8,4,2,1");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = "4,x,1".parse::<StepSequence>();

        assert!(matches!(
            result,
            Err(StepSequenceError::Parse { ref token, .. }) if token == "x"
        ));
        assert_eq!("".parse::<StepSequence>(), Err(StepSequenceError::Empty));
    }

    #[test]
    fn test_first_sampled_step() {
        let steps = StepSequence::new(vec![4, 2, 1]).unwrap();

        assert_eq!(steps.first_sampled_step(0, 0), 0);
        assert_eq!(steps.first_sampled_step(4, 8), 0);
        assert_eq!(steps.first_sampled_step(2, 4), 1);
        assert_eq!(steps.first_sampled_step(2, 2), 1);
        assert_eq!(steps.first_sampled_step(1, 4), 2);
        assert_eq!(steps.first_sampled_step(3, 3), 2);
    }
}
