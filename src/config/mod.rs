//! Configuration management for the puzzle generator

pub mod difficulty;
pub mod settings;

pub use difficulty::{Difficulty, DifficultyConfig, DifficultyTable, UnknownDifficulty};
pub use settings::{
    Settings, GenerationConfig, OutputConfig, OutputFormat, CliOverrides, ADJACENT_PAIRS
};
