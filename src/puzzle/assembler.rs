//! Puzzle assembly: solution, constraints, then clue reduction

use super::constraints::ConstraintExtractor;
use super::generator::SolutionGenerator;
use super::puzzle::Puzzle;
use super::reducer::ClueReducer;
use crate::config::{Difficulty, DifficultyTable, Settings};
use crate::error::{PuzzleError, PuzzleResult};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds complete puzzles from a random source and a difficulty table
pub struct PuzzleGenerator<R: Rng> {
    rng: R,
    table: DifficultyTable,
    empty_constraint_chance: Option<f64>,
    max_attempts: usize,
}

impl PuzzleGenerator<StdRng> {
    /// Generator configured from settings, seeded from `generation.seed` when set
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.generation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            rng,
            table: settings.difficulty,
            empty_constraint_chance: settings.generation.empty_constraint_chance,
            max_attempts: settings.generation.max_attempts.max(1),
        }
    }

    /// Generator using the canonical table and a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    /// Generator over the given random source with default settings
    pub fn new(rng: R) -> Self {
        let defaults = Settings::default();
        Self {
            rng,
            table: defaults.difficulty,
            empty_constraint_chance: defaults.generation.empty_constraint_chance,
            max_attempts: defaults.generation.max_attempts,
        }
    }

    /// Generate one puzzle. A generation failure is returned as-is; the caller
    /// retries the whole call.
    pub fn generate(&mut self, difficulty: Difficulty) -> PuzzleResult<Puzzle> {
        let config = self.table.get(difficulty);

        let solution = SolutionGenerator::generate(&mut self.rng)?;

        let candidates = ConstraintExtractor::candidates(&solution);
        let mut constraints =
            ConstraintExtractor::select(&candidates, config.max_constraints, &mut self.rng);

        if let Some(chance) = self.empty_constraint_chance {
            if self.rng.random_bool(chance.clamp(0.0, 1.0)) {
                debug!("Dropping all constraints for this puzzle");
                constraints.clear();
            }
        }

        let grid = ClueReducer::reduce(&solution, &constraints, config.target_clues, &mut self.rng);
        debug!(
            "Assembled {} puzzle with {} clues and {} constraints",
            difficulty,
            grid.filled_count(),
            constraints.len()
        );

        Ok(Puzzle::new(grid, solution, constraints, difficulty))
    }

    /// Generate a puzzle, retrying the whole call on generation failure
    pub fn generate_with_retries(&mut self, difficulty: Difficulty) -> PuzzleResult<Puzzle> {
        let max_attempts = self.max_attempts;
        retry(max_attempts, || self.generate(difficulty))
    }
}

/// Run `attempt` up to `max_attempts` times, returning the first success
fn retry<T>(
    max_attempts: usize,
    mut attempt: impl FnMut() -> PuzzleResult<T>,
) -> PuzzleResult<T> {
    for n in 1..=max_attempts {
        match attempt() {
            Ok(value) => return Ok(value),
            Err(err) => warn!("Attempt {}/{} failed: {}", n, max_attempts, err),
        }
    }

    Err(PuzzleError::GenerationExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Line, GridRules};
    use crate::puzzle::constraints::ConstraintKind;
    use crate::puzzle::deduction::DeductionSolver;

    fn assert_puzzle_properties(puzzle: &Puzzle) {
        let solution = puzzle.solution();
        for line in Line::all() {
            let cells = solution.line(line);
            assert!(GridRules::is_balanced(&cells));
            assert!(!GridRules::has_triple(&cells));
        }

        for (kind, pair) in puzzle.constraints().iter() {
            assert!(pair.first().is_adjacent(pair.second()));
            let expected = if solution.get(pair.first()) == solution.get(pair.second()) {
                ConstraintKind::Equals
            } else {
                ConstraintKind::Opposite
            };
            assert_eq!(kind, expected);
        }

        for coord in puzzle.grid().filled_coords() {
            assert_eq!(puzzle.grid().get(coord), solution.get(coord));
        }

        let result = DeductionSolver::new(puzzle.constraints()).solve(puzzle.grid());
        assert!(result.complete);
        assert_eq!(&result.grid, solution);
    }

    #[test]
    fn test_every_difficulty_produces_solvable_puzzles() {
        let mut generator = PuzzleGenerator::seeded(1234);
        for difficulty in Difficulty::ALL {
            for _ in 0..20 {
                let puzzle = generator.generate(difficulty).unwrap();
                assert_eq!(puzzle.difficulty(), difficulty);
                assert!(puzzle.constraints().len() <= difficulty.config().max_constraints);
                assert!(!puzzle.constraints().equals.is_empty());
                assert!(!puzzle.constraints().opposite.is_empty());
                assert_puzzle_properties(&puzzle);
            }
        }
    }

    #[test]
    fn test_hard_puzzles_hundred_times() {
        for _ in 0..100 {
            let puzzle = crate::generate_puzzle(Difficulty::Hard).unwrap();
            assert_eq!(puzzle.difficulty(), Difficulty::Hard);
            assert_puzzle_properties(&puzzle);
        }
    }

    #[test]
    fn test_retry_exhaustion() {
        let mut calls = 0;
        let result: PuzzleResult<()> = retry(3, || {
            calls += 1;
            Err(PuzzleError::GenerationFailure)
        });

        assert_eq!(result, Err(PuzzleError::GenerationExhausted { attempts: 3 }));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_retry_stops_at_first_success() {
        let mut calls = 0;
        let result = retry(5, || {
            calls += 1;
            if calls < 2 {
                Err(PuzzleError::GenerationFailure)
            } else {
                Ok(calls)
            }
        });

        assert_eq!(result, Ok(2));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_clue_count_never_drops_below_target() {
        let mut generator = PuzzleGenerator::seeded(99);
        for difficulty in Difficulty::ALL {
            for _ in 0..10 {
                let puzzle = generator.generate(difficulty).unwrap();
                assert!(puzzle.clue_count() >= difficulty.config().target_clues);
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = PuzzleGenerator::seeded(5).generate(Difficulty::Medium).unwrap();
        let b = PuzzleGenerator::seeded(5).generate(Difficulty::Medium).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_constraint_mode() {
        let mut settings = Settings::default();
        settings.generation.seed = Some(17);
        settings.generation.empty_constraint_chance = Some(1.0);

        let mut generator = PuzzleGenerator::from_settings(&settings);
        for _ in 0..5 {
            let puzzle = generator.generate_with_retries(Difficulty::Easy).unwrap();
            assert!(puzzle.constraints().is_empty());
            assert_puzzle_properties(&puzzle);
        }
    }

    #[test]
    fn test_custom_table_from_settings() {
        let mut settings = Settings::default();
        settings.generation.seed = Some(3);
        settings.difficulty.medium.max_constraints = 2;

        let mut generator = PuzzleGenerator::from_settings(&settings);
        let puzzle = generator.generate(Difficulty::Medium).unwrap();
        assert_eq!(puzzle.constraints().len(), 2);
        assert_puzzle_properties(&puzzle);
    }
}
