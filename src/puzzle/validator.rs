//! Rule validation for completed grids

use crate::grid::{Grid, GridRules, Line, Symbol, GRID_SIZE, PER_LINE};
use std::fmt;

/// Per-rule verdict for a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleValidation {
    /// Every row holds exactly three of each symbol
    pub rows_valid: bool,
    /// Every column holds exactly three of each symbol
    pub columns_valid: bool,
    /// No line holds three consecutive equal symbols
    pub adjacent_valid: bool,
    pub violations: Vec<RuleViolation>,
}

/// A broken rule found during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    Unbalanced { line: Line, suns: usize, moons: usize },
    Triple { line: Line, start: usize, symbol: Symbol },
}

impl PuzzleValidation {
    pub fn is_valid(&self) -> bool {
        self.rows_valid && self.columns_valid && self.adjacent_valid
    }
}

/// Check the balance and adjacency rules over a grid.
///
/// Empty cells count toward neither symbol, so a partial grid never passes the
/// balance checks.
pub fn validate_puzzle(grid: &Grid) -> PuzzleValidation {
    let mut violations = Vec::new();
    let mut rows_valid = true;
    let mut columns_valid = true;
    let mut adjacent_valid = true;

    for line in Line::all() {
        let cells = grid.line(line);

        if !GridRules::is_balanced(&cells) {
            match line {
                Line::Row(_) => rows_valid = false,
                Line::Column(_) => columns_valid = false,
            }
            violations.push(RuleViolation::Unbalanced {
                line,
                suns: grid.count_in_line(line, Symbol::Sun),
                moons: grid.count_in_line(line, Symbol::Moon),
            });
        }

        for start in 0..=GRID_SIZE - 3 {
            if GridRules::has_triple(&cells[start..start + 3]) {
                adjacent_valid = false;
                if let Some(symbol) = cells[start] {
                    violations.push(RuleViolation::Triple { line, start, symbol });
                }
            }
        }
    }

    PuzzleValidation {
        rows_valid,
        columns_valid,
        adjacent_valid,
        violations,
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::Unbalanced { line, suns, moons } => write!(
                f,
                "{} has {} suns and {} moons, expected {} of each",
                line, suns, moons, PER_LINE
            ),
            RuleViolation::Triple { line, start, symbol } => write!(
                f,
                "{} has three {:?} in a row starting at {}",
                line, symbol, start
            ),
        }
    }
}

impl fmt::Display for PuzzleValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Result: {}", if self.is_valid() { "VALID" } else { "INVALID" })?;
        writeln!(f, "  Rows balanced: {}", self.rows_valid)?;
        writeln!(f, "  Columns balanced: {}", self.columns_valid)?;
        writeln!(f, "  No triples: {}", self.adjacent_valid)?;

        if !self.violations.is_empty() {
            writeln!(f, "  Violations:")?;
            for violation in &self.violations {
                writeln!(f, "    - {}", violation)?;
            }
        }

        Ok(())
    }
}
