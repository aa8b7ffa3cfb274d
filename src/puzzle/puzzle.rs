//! Generated puzzle record

use super::constraints::ConstraintSet;
use crate::config::Difficulty;
use crate::grid::Grid;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A generated puzzle: clue grid, full solution, relations and difficulty.
///
/// Built once by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    grid: Grid,
    solution: Grid,
    constraints: ConstraintSet,
    difficulty: Difficulty,
}

/// Result of checking a player's filled grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    /// Some cells are still empty
    Incomplete,
    Correct,
    Incorrect,
}

/// Compact description of a puzzle for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub difficulty: Difficulty,
    pub clues: usize,
    pub equals_constraints: usize,
    pub opposite_constraints: usize,
}

impl Puzzle {
    pub(crate) fn new(
        grid: Grid,
        solution: Grid,
        constraints: ConstraintSet,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            grid,
            solution,
            constraints,
            difficulty,
        }
    }

    /// Prefilled clue cells
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn clue_count(&self) -> usize {
        self.grid.filled_count()
    }

    /// Compare a player's grid against the solution
    pub fn check_attempt(&self, attempt: &Grid) -> AttemptStatus {
        if !attempt.is_complete() {
            AttemptStatus::Incomplete
        } else if *attempt == self.solution {
            AttemptStatus::Correct
        } else {
            AttemptStatus::Incorrect
        }
    }

    pub fn summary(&self) -> PuzzleSummary {
        PuzzleSummary {
            difficulty: self.difficulty,
            clues: self.clue_count(),
            equals_constraints: self.constraints.equals.len(),
            opposite_constraints: self.constraints.opposite.len(),
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write puzzle to {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read puzzle from {}", path.as_ref().display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse puzzle from {}", path.as_ref().display()))
    }
}
