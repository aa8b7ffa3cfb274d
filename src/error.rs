//! Error types for puzzle generation and grid parsing

use thiserror::Error;

/// Errors raised by the puzzle core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// The backtracking search exhausted every branch without completing the grid
    #[error("failed to generate a valid solution grid")]
    GenerationFailure,

    #[error("puzzle generation failed after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("invalid character '{found}' at ({row}, {col}), expected A, B, 0, 1 or '.'")]
    InvalidSymbol { found: char, row: usize, col: usize },

    #[error("invalid constraint pair {cells}: {reason}")]
    InvalidConstraint { cells: String, reason: &'static str },

    #[error("grid must be {expected}x{expected}, found {detail}")]
    BadDimensions { expected: usize, detail: String },
}

pub type PuzzleResult<T> = std::result::Result<T, PuzzleError>;
