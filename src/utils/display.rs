//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::grid::{grid_to_string, Cell, Coord, Grid, Symbol, GRID_SIZE};
use crate::puzzle::{AttemptStatus, ConstraintKind, ConstraintPair, Direction, Puzzle, PuzzleValidation};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Format puzzles for display
pub struct PuzzleFormatter;

impl PuzzleFormatter {
    fn cell_char(cell: Cell) -> char {
        match cell {
            Some(Symbol::Sun) => '☀',
            Some(Symbol::Moon) => '☾',
            None => '·',
        }
    }

    fn marker(kind: ConstraintKind) -> char {
        match kind {
            ConstraintKind::Equals => '=',
            ConstraintKind::Opposite => 'x',
        }
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in grid.rows() {
            for &cell in row {
                output.push(Self::cell_char(cell));
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("  ");
        for col in 0..GRID_SIZE {
            output.push_str(&format!("{:2}", col));
        }
        output.push('\n');

        for (row, cells) in grid.rows().iter().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for &cell in cells {
                output.push(Self::cell_char(cell));
                output.push(' ');
            }
            output.push('\n');
        }

        output
    }

    /// Format the clue grid with constraint markers between cells:
    /// '=' for equals and 'x' for opposite
    pub fn format_puzzle_grid(puzzle: &Puzzle) -> String {
        let markers: HashMap<(Coord, Direction), char> = puzzle
            .constraints()
            .iter()
            .map(|(kind, pair): (ConstraintKind, &ConstraintPair)| {
                ((pair.first(), pair.direction), Self::marker(kind))
            })
            .collect();
        let grid = puzzle.grid();

        let mut output = String::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let coord = Coord::new(row, col);
                output.push(Self::cell_char(grid.get(coord)));
                if col + 1 < GRID_SIZE {
                    let marker = markers.get(&(coord, Direction::Horizontal)).copied().unwrap_or(' ');
                    output.push(marker);
                }
            }
            output.push('\n');

            if row + 1 < GRID_SIZE {
                let line: String = (0..GRID_SIZE)
                    .map(|col| {
                        let marker = markers
                            .get(&(Coord::new(row, col), Direction::Vertical))
                            .copied()
                            .unwrap_or(' ');
                        format!("{} ", marker)
                    })
                    .collect();
                output.push_str(line.trim_end());
                output.push('\n');
            }
        }

        output
    }

    /// Format a single puzzle for console output
    pub fn format_puzzle(puzzle: &Puzzle, show_solution: bool) -> String {
        let summary = puzzle.summary();
        let mut output = String::new();

        output.push_str(&format!("=== {} puzzle ===\n", puzzle.difficulty()));
        output.push_str(&format!("Clues: {}\n", summary.clues));
        output.push_str(&format!(
            "Constraints: {} equals, {} opposite\n\n",
            summary.equals_constraints, summary.opposite_constraints
        ));
        output.push_str(&Self::format_puzzle_grid(puzzle));

        if show_solution {
            output.push_str("\nSolution:\n");
            output.push_str(&Self::format_grid_compact(puzzle.solution()));
        }

        output
    }

    /// Format multiple puzzles as a summary table
    pub fn format_puzzle_summary(puzzles: &[Puzzle]) -> String {
        let mut output = String::new();

        output.push_str("Puzzles Summary:\n");
        output.push_str("#    | Difficulty | Clues | Equals | Opposite\n");
        output.push_str("-----|------------|-------|--------|---------\n");

        for (i, puzzle) in puzzles.iter().enumerate() {
            let summary = puzzle.summary();
            output.push_str(&format!(
                "{:4} | {:10} | {:5} | {:6} | {}\n",
                i + 1,
                summary.difficulty.as_str(),
                summary.clues,
                summary.equals_constraints,
                summary.opposite_constraints
            ));
        }

        output
    }

    /// Save puzzles to files based on output format
    pub fn save_puzzles<P: AsRef<Path>>(
        puzzles: &[Puzzle],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                for (i, puzzle) in puzzles.iter().enumerate() {
                    let filepath = output_dir.join(format!("puzzle_{:03}.txt", i + 1));
                    let content = format!(
                        "{}\nClue grid:\n{}",
                        Self::format_puzzle(puzzle, true),
                        grid_to_string(puzzle.grid())
                    );
                    std::fs::write(&filepath, content)
                        .with_context(|| format!("Failed to write {}", filepath.display()))?;
                }
            }
            OutputFormat::Json => {
                for (i, puzzle) in puzzles.iter().enumerate() {
                    let filepath = output_dir.join(format!("puzzle_{:03}.json", i + 1));
                    puzzle.save_to_file(&filepath)?;
                }

                let summaries: Vec<_> = puzzles.iter().map(|p| p.summary()).collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(output_dir.join("summary.json"), summary_json)
                    .context("Failed to write summary.json")?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Honors `NO_COLOR` and dumb terminals
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// One-line verdict for a rule check
    pub fn validation_verdict(validation: &PuzzleValidation) -> String {
        if validation.is_valid() {
            Self::success("✅ Grid satisfies every rule!")
        } else {
            Self::error(&format!(
                "❌ Grid breaks the rules ({} violation(s))",
                validation.violations.len()
            ))
        }
    }

    /// One-line verdict for a deduced grid measured against the stored solution
    pub fn deduction_verdict(status: AttemptStatus, empty_cells: usize) -> String {
        match status {
            AttemptStatus::Correct => Self::success("✅ Deduction reproduces the stored solution"),
            AttemptStatus::Incorrect => Self::error("❌ Deduction disagrees with the stored solution"),
            AttemptStatus::Incomplete => Self::warning(&format!(
                "⚠️  Deduction stalled with {} empty cells",
                empty_cells
            )),
        }
    }
}

/// Terminal colors used by the CLI
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
