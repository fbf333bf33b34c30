use std::fmt;

use crate::constants::MEMORY_SIZE;

#[derive(Debug, PartialEq, Eq)]
pub enum CompareError {
    /// The dump ran out of lines before every checked entry was read.
    TruncatedOutput {
        section: &'static str,
        found: usize,
        expected: usize,
    },
    /// Reference memory was not padded to a full image.
    UnpaddedReference { found: usize },
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::TruncatedOutput {
                section,
                found,
                expected,
            } => write!(
                f,
                "Output dump is truncated: {} has {} entries, expected {}",
                section, found, expected
            ),
            CompareError::UnpaddedReference { found } => write!(
                f,
                "Reference memory has {} entries, expected {}",
                found, MEMORY_SIZE
            ),
        }
    }
}

impl std::error::Error for CompareError {}
