//! Tango Puzzle Generator
//!
//! This library generates 6x6 two-symbol logic puzzles whose clues and
//! equals/opposite constraints are always enough to finish the grid by pure
//! deduction, without guessing.

pub mod config;
pub mod error;
pub mod grid;
pub mod puzzle;
pub mod utils;

pub use config::{Difficulty, Settings};
pub use error::PuzzleError;
pub use grid::{Grid, Symbol};
pub use puzzle::{validate_puzzle, Puzzle, PuzzleGenerator, PuzzleValidation};

/// Main entry point: generate one puzzle of the given difficulty
pub fn generate_puzzle(difficulty: Difficulty) -> Result<Puzzle, PuzzleError> {
    PuzzleGenerator::new(rand::rng()).generate(difficulty)
}
