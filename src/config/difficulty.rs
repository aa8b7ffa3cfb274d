//! Difficulty levels and their tuning values

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Puzzle difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a difficulty token, substituting Medium for anything unrecognized
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: UnknownDifficulty| {
            warn!("{}, falling back to {}", err, Difficulty::default());
            Difficulty::default()
        })
    }

    /// Canonical tuning values for this difficulty
    pub fn config(self) -> DifficultyConfig {
        DifficultyTable::CANONICAL.get(self)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized difficulty token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}'")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// Clue and constraint budget for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Filled cells the reducer aims to leave
    pub target_clues: usize,
    /// Upper bound on equals + opposite constraints
    pub max_constraints: usize,
}

/// Tuning values for every difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: DifficultyConfig,
    pub medium: DifficultyConfig,
    pub hard: DifficultyConfig,
}

impl DifficultyTable {
    pub const CANONICAL: DifficultyTable = DifficultyTable {
        easy: DifficultyConfig { target_clues: 12, max_constraints: 4 },
        medium: DifficultyConfig { target_clues: 8, max_constraints: 6 },
        hard: DifficultyConfig { target_clues: 4, max_constraints: 8 },
    };

    pub fn get(&self, difficulty: Difficulty) -> DifficultyConfig {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::CANONICAL
    }
}
