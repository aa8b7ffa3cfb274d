//! Clue removal that keeps the puzzle solvable by deduction alone

use super::constraints::ConstraintSet;
use super::deduction::DeductionSolver;
use crate::grid::Grid;
use log::debug;
use rand::Rng;

/// Strips clues from a solution while deduction still recovers it
pub struct ClueReducer;

impl ClueReducer {
    /// Try clearing each cell once, in random order, keeping the clue whenever
    /// deduction can no longer rebuild `solution` without it.
    ///
    /// Stops as soon as the grid is down to `target_clues` filled cells. The
    /// returned grid always deduces back to `solution` under `constraints`.
    pub fn reduce<R: Rng + ?Sized>(
        solution: &Grid,
        constraints: &ConstraintSet,
        target_clues: usize,
        rng: &mut R,
    ) -> Grid {
        let solver = DeductionSolver::new(constraints);
        let mut clues = solution.clone();
        let mut load_bearing = 0usize;

        for coord in Grid::shuffled_coords(rng) {
            if clues.filled_count() <= target_clues {
                break;
            }

            let original = clues.get(coord);
            if original.is_none() {
                continue;
            }
            clues.set(coord, None);

            let result = solver.solve(&clues);
            if !result.complete || result.grid != *solution {
                clues.set(coord, original);
                load_bearing += 1;
            }
        }

        debug!(
            "Reduced to {} clues (target {}, {} load-bearing)",
            clues.filled_count(),
            target_clues,
            load_bearing
        );
        clues
    }
}
