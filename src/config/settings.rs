//! Configuration settings for the puzzle generator

use super::difficulty::DifficultyTable;
use crate::grid::{CELL_COUNT, GRID_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Adjacent cell pairs in the grid, the ceiling for any constraint budget
pub const ADJACENT_PAIRS: usize = 2 * GRID_SIZE * (GRID_SIZE - 1);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub generation: GenerationConfig,
    #[serde(default)]
    pub difficulty: DifficultyTable,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fixed seed for reproducible puzzles; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whole-call retries on generation failure
    pub max_attempts: usize,
    /// Probability of shipping a puzzle with no constraints at all. Off when absent.
    #[serde(default)]
    pub empty_constraint_chance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: 5,
            empty_constraint_chance: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            output_directory: PathBuf::from("output/puzzles"),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.generation.max_attempts == 0 {
            anyhow::bail!("Maximum attempts must be positive");
        }

        if let Some(chance) = self.generation.empty_constraint_chance {
            if !(0.0..=1.0).contains(&chance) {
                anyhow::bail!("Empty constraint chance must be within [0, 1], got {}", chance);
            }
        }

        for (name, config) in [
            ("easy", self.difficulty.easy),
            ("medium", self.difficulty.medium),
            ("hard", self.difficulty.hard),
        ] {
            if config.target_clues > CELL_COUNT {
                anyhow::bail!(
                    "Target clues for {} must be at most {}, got {}",
                    name, CELL_COUNT, config.target_clues
                );
            }
            if config.max_constraints > ADJACENT_PAIRS {
                anyhow::bail!(
                    "Maximum constraints for {} must be at most {}, got {}",
                    name, ADJACENT_PAIRS, config.max_constraints
                );
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(seed) = cli_overrides.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}
