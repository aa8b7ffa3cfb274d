//! Puzzle generation, deduction and validation

pub mod assembler;
pub mod constraints;
pub mod deduction;
pub mod generator;
pub mod puzzle;
pub mod reducer;
pub mod validator;

pub use assembler::PuzzleGenerator;
pub use constraints::{ConstraintExtractor, ConstraintKind, ConstraintPair, ConstraintSet, Direction};
pub use deduction::{Deduction, DeductionSolver};
pub use generator::SolutionGenerator;
pub use puzzle::{AttemptStatus, Puzzle, PuzzleSummary};
pub use reducer::ClueReducer;
pub use validator::{validate_puzzle, PuzzleValidation, RuleViolation};
