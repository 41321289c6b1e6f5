//! The off-board error.

use thiserror::Error;

/// Raised when a coordinate falls outside the 8x8 board or when square
/// notation is malformed.
///
/// The rules engine never surfaces this from its own scans; it only reaches a
/// caller that builds a [`Square`](crate::Square) directly from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{input} is not on the board")]
pub struct OffBoard {
    input: String,
}

impl OffBoard {
    pub(crate) fn notation(input: &str) -> Self {
        OffBoard {
            input: input.to_string(),
        }
    }

    pub(crate) fn coords(rank: i32, file: i32) -> Self {
        OffBoard {
            input: format!("(rank {}, file {})", rank, file),
        }
    }

    /// Returns the rejected input as it was given.
    pub fn input(&self) -> &str {
        &self.input
    }
}
