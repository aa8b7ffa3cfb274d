//! Forward-only logical deduction over a partial grid

use super::constraints::{ConstraintKind, ConstraintSet};
use crate::grid::{Grid, Line, Symbol, GRID_SIZE, PER_LINE};
use log::trace;

/// Outcome of running the deduction rules to fixpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduction {
    pub grid: Grid,
    pub complete: bool,
    /// Rule rounds run, including the final round that changed nothing
    pub rounds: usize,
}

/// Applies balance, adjacency and constraint propagation until nothing changes.
///
/// No search and no tentative assignment: only cells forced by what is already
/// on the grid get filled. The input is not checked for global correctness.
pub struct DeductionSolver<'a> {
    constraints: &'a ConstraintSet,
}

impl<'a> DeductionSolver<'a> {
    pub fn new(constraints: &'a ConstraintSet) -> Self {
        Self { constraints }
    }

    /// Run rounds of every rule family until a round makes no change
    pub fn solve(&self, grid: &Grid) -> Deduction {
        let mut grid = grid.clone();
        let mut rounds = 0;

        loop {
            rounds += 1;
            let mut changed = Self::apply_balance(&mut grid);
            changed |= Self::apply_adjacency(&mut grid);
            changed |= self.apply_constraints(&mut grid);
            trace!("Deduction round {}: {} cells filled", rounds, grid.filled_count());
            if !changed {
                break;
            }
        }

        let complete = grid.is_complete();
        Deduction { grid, complete, rounds }
    }

    /// A line already holding three of one symbol gets the other in every empty cell
    pub(crate) fn apply_balance(grid: &mut Grid) -> bool {
        let mut changed = false;

        for line in Line::all() {
            for symbol in Symbol::ALL {
                if grid.count_in_line(line, symbol) != PER_LINE {
                    continue;
                }
                for coord in line.coords() {
                    if grid.get(coord).is_none() {
                        grid.set(coord, Some(symbol.other()));
                        changed = true;
                    }
                }
            }
        }

        changed
    }

    /// Two consecutive equal symbols force the other symbol on both ends
    pub(crate) fn apply_adjacency(grid: &mut Grid) -> bool {
        let mut changed = false;

        for line in Line::all() {
            for start in 0..=GRID_SIZE - 3 {
                let [a, b, c] = [start, start + 1, start + 2].map(|offset| line.coord(offset));

                if let (Some(x), Some(y), None) = (grid.get(a), grid.get(b), grid.get(c)) {
                    if x == y {
                        grid.set(c, Some(x.other()));
                        changed = true;
                    }
                }
                if let (None, Some(x), Some(y)) = (grid.get(a), grid.get(b), grid.get(c)) {
                    if x == y {
                        grid.set(a, Some(x.other()));
                        changed = true;
                    }
                }
            }
        }

        changed
    }

    /// A pair with exactly one side filled gets its partner filled
    pub(crate) fn apply_constraints(&self, grid: &mut Grid) -> bool {
        let mut changed = false;

        for (kind, pair) in self.constraints.iter() {
            let (from, to) = match (grid.get(pair.first()), grid.get(pair.second())) {
                (Some(symbol), None) => (symbol, pair.second()),
                (None, Some(symbol)) => (symbol, pair.first()),
                _ => continue,
            };

            let value = match kind {
                ConstraintKind::Equals => from,
                ConstraintKind::Opposite => from.other(),
            };
            grid.set(to, Some(value));
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{parse_grid_from_string, Coord};
    use crate::puzzle::constraints::ConstraintPair;
    use crate::grid::Symbol::{Moon, Sun};

    fn grid(text: &str) -> Grid {
        parse_grid_from_string(text).unwrap()
    }

    #[test]
    fn test_balance_fills_row_with_third_sun_anywhere() {
        for extra in 3..GRID_SIZE {
            let mut g = grid("AAB...\n......\n......\n......\n......\n......\n");
            g.set(Coord::new(0, extra), Some(Sun));

            assert!(DeductionSolver::apply_balance(&mut g));
            for col in 3..GRID_SIZE {
                let expected = if col == extra { Sun } else { Moon };
                assert_eq!(g.get(Coord::new(0, col)), Some(expected));
            }
        }
    }

    #[test]
    fn test_balance_columns() {
        let mut g = grid("B.....\n......\nB.....\n......\nB.....\n......\n");
        assert!(DeductionSolver::apply_balance(&mut g));
        for row in [1, 3, 5] {
            assert_eq!(g.get(Coord::new(row, 0)), Some(Sun));
        }
    }

    #[test]
    fn test_adjacency_both_ends() {
        let mut g = grid(".AA...\n......\n......\n...B..\n...B..\n......\n");
        assert!(DeductionSolver::apply_adjacency(&mut g));

        assert_eq!(g.get(Coord::new(0, 0)), Some(Moon));
        assert_eq!(g.get(Coord::new(0, 3)), Some(Moon));
        assert_eq!(g.get(Coord::new(2, 3)), Some(Sun));
        assert_eq!(g.get(Coord::new(5, 3)), Some(Sun));
    }

    #[test]
    fn test_adjacency_ignores_gap_pattern() {
        let mut g = grid("A.A...\n......\n......\n......\n......\n......\n");
        assert!(!DeductionSolver::apply_adjacency(&mut g));
        assert_eq!(g.get(Coord::new(0, 1)), None);
    }

    #[test]
    fn test_constraint_propagation_single_pass() {
        let constraints = ConstraintSet {
            equals: vec![ConstraintPair::horizontal(0, 0)],
            opposite: vec![ConstraintPair::horizontal(1, 0)],
        };
        let mut g = Grid::empty();
        g.set(Coord::new(0, 0), Some(Sun));
        g.set(Coord::new(1, 0), Some(Sun));

        let solver = DeductionSolver::new(&constraints);
        assert!(solver.apply_constraints(&mut g));
        assert_eq!(g.get(Coord::new(0, 1)), Some(Sun));
        assert_eq!(g.get(Coord::new(1, 1)), Some(Moon));

        // Filled on both sides: nothing left to do
        assert!(!solver.apply_constraints(&mut g));
    }

    #[test]
    fn test_constraint_propagation_from_second_cell() {
        let constraints = ConstraintSet {
            equals: vec![ConstraintPair::vertical(3, 3)],
            opposite: vec![ConstraintPair::vertical(0, 5)],
        };
        let mut g = Grid::empty();
        g.set(Coord::new(4, 3), Some(Moon));
        g.set(Coord::new(1, 5), Some(Moon));

        let result = DeductionSolver::new(&constraints).solve(&g);
        assert_eq!(result.grid.get(Coord::new(3, 3)), Some(Moon));
        assert_eq!(result.grid.get(Coord::new(0, 5)), Some(Sun));
        assert!(!result.complete);
    }

    #[test]
    fn test_full_grid_is_a_fixpoint() {
        let solved = grid("AABABB\nBBABAA\nABBAAB\nBAABBA\nABABAB\nBABABA\n");
        let result = DeductionSolver::new(&ConstraintSet::default()).solve(&solved);

        assert!(result.complete);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.grid, solved);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let result = DeductionSolver::new(&ConstraintSet::default()).solve(&Grid::empty());
        assert!(!result.complete);
        assert_eq!(result.grid.filled_count(), 0);
    }

    #[test]
    fn test_deduction_recovers_solution() {
        let solved = grid("AABABB\nBBABAA\nABBAAB\nBAABBA\nABABAB\nBABABA\n");
        // Drop a handful of cells whose values are forced by their lines
        let mut partial = solved.clone();
        for coord in [Coord::new(0, 2), Coord::new(1, 5), Coord::new(4, 0), Coord::new(5, 3)] {
            partial.set(coord, None);
        }

        let result = DeductionSolver::new(&ConstraintSet::default()).solve(&partial);
        assert!(result.complete);
        assert_eq!(result.grid, solved);
    }
}
