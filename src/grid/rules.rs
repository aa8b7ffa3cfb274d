//! Balance and adjacency rules of the puzzle

use super::{Coord, Grid, Line, Symbol, GRID_SIZE, PER_LINE};

/// Rule predicates shared by the generator and the validator
pub struct GridRules;

impl GridRules {
    /// Check whether `symbol` may be placed at `coord` without breaking a rule.
    ///
    /// Rejects the placement when it would push the symbol past three in its row
    /// or column, leave too few empty cells for the other symbol to reach three,
    /// or complete a run of three equal symbols in any window holding `coord`.
    pub fn can_place(grid: &Grid, coord: Coord, symbol: Symbol) -> bool {
        for line in [Line::Row(coord.row), Line::Column(coord.col)] {
            if grid.count_in_line(line, symbol) >= PER_LINE {
                return false;
            }

            let mut empty_after = grid.empty_in_line(line);
            if grid.get(coord).is_none() {
                empty_after -= 1;
            }
            let other_needed = PER_LINE.saturating_sub(grid.count_in_line(line, symbol.other()));
            if other_needed > empty_after {
                return false;
            }
        }

        !Self::completes_run(grid, coord, symbol)
    }

    /// True when `symbol` at `coord` would form three equal symbols in a row,
    /// horizontally or vertically
    pub fn completes_run(grid: &Grid, coord: Coord, symbol: Symbol) -> bool {
        let lines = [(Line::Row(coord.row), coord.col), (Line::Column(coord.col), coord.row)];

        lines.iter().any(|&(line, offset)| {
            let cells = grid.line(line);
            let start_min = offset.saturating_sub(2);
            let start_max = offset.min(GRID_SIZE - 3);

            (start_min..=start_max).any(|start| {
                (start..start + 3)
                    .filter(|&i| i != offset)
                    .all(|i| cells[i] == Some(symbol))
            })
        })
    }

    /// True when the line holds three consecutive equal symbols
    pub fn has_triple(cells: &[Option<Symbol>]) -> bool {
        cells
            .windows(3)
            .any(|w| w[0].is_some() && w[0] == w[1] && w[1] == w[2])
    }

    /// True when the line holds exactly three of each symbol
    pub fn is_balanced(cells: &[Option<Symbol>]) -> bool {
        Symbol::ALL.iter().all(|&symbol| {
            cells.iter().filter(|&&cell| cell == Some(symbol)).count() == PER_LINE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_grid_from_string;

    #[test]
    fn test_balance_limit() {
        let grid = parse_grid_from_string("AABA..\n......\n......\n......\n......\n......\n").unwrap();
        assert!(!GridRules::can_place(&grid, Coord::new(0, 4), Symbol::Sun));
        assert!(GridRules::can_place(&grid, Coord::new(0, 4), Symbol::Moon));
    }

    #[test]
    fn test_other_symbol_reachability() {
        let grid = parse_grid_from_string("AA.B..\n......\n......\n......\n......\n......\n").unwrap();
        assert!(GridRules::can_place(&grid, Coord::new(0, 2), Symbol::Moon));

        // Third sun leaves exactly three cells for the moons
        let grid = parse_grid_from_string("A.A...\n......\n......\n......\n......\n......\n").unwrap();
        assert!(GridRules::can_place(&grid, Coord::new(0, 3), Symbol::Sun));
        assert!(!GridRules::can_place(&grid, Coord::new(0, 1), Symbol::Sun));
    }

    #[test]
    fn test_run_windows() {
        let grid = parse_grid_from_string("AA....\n......\n......\n......\n......\n......\n").unwrap();
        // Backward pair
        assert!(GridRules::completes_run(&grid, Coord::new(0, 2), Symbol::Sun));
        assert!(!GridRules::completes_run(&grid, Coord::new(0, 2), Symbol::Moon));

        let grid = parse_grid_from_string("A.A...\n......\n......\n......\n......\n......\n").unwrap();
        // Straddling triple
        assert!(GridRules::completes_run(&grid, Coord::new(0, 1), Symbol::Sun));

        let grid = parse_grid_from_string("B.....\nB.....\n......\n......\n......\n......\n").unwrap();
        // Vertical backward pair
        assert!(GridRules::completes_run(&grid, Coord::new(2, 0), Symbol::Moon));
        assert!(!GridRules::can_place(&grid, Coord::new(2, 0), Symbol::Moon));
    }

    #[test]
    fn test_line_predicates() {
        use crate::grid::Symbol::*;
        let line = [Some(Sun), Some(Sun), Some(Moon), Some(Moon), Some(Sun), Some(Moon)];
        assert!(GridRules::is_balanced(&line));
        assert!(!GridRules::has_triple(&line));

        let line = [Some(Sun), Some(Sun), Some(Sun), Some(Moon), Some(Moon), Some(Moon)];
        assert!(GridRules::is_balanced(&line));
        assert!(GridRules::has_triple(&line));

        let line = [None, None, None, Some(Moon), Some(Moon), Some(Sun)];
        assert!(!GridRules::is_balanced(&line));
        assert!(!GridRules::has_triple(&line));
    }
}
