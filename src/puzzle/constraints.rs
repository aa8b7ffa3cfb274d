//! Equals / opposite relations between neighboring cells

use crate::error::PuzzleError;
use crate::grid::{Coord, Grid, GRID_SIZE};
use itertools::Itertools;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Relation between the two cells of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Equals,
    Opposite,
}

/// Orientation of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Two grid-adjacent cells, left/top cell first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPair")]
pub struct ConstraintPair {
    pub cells: [Coord; 2],
    pub direction: Direction,
}

/// Pair as read from the wire, before its cells are checked
#[derive(Deserialize)]
struct UncheckedPair {
    cells: [Coord; 2],
    direction: Direction,
}

impl TryFrom<UncheckedPair> for ConstraintPair {
    type Error = PuzzleError;

    fn try_from(raw: UncheckedPair) -> Result<Self, Self::Error> {
        let [a, b] = raw.cells;
        let reject = |reason| PuzzleError::InvalidConstraint {
            cells: format!("{}-{}", a, b),
            reason,
        };

        if !a.in_bounds() || !b.in_bounds() {
            return Err(reject("cell outside the grid"));
        }
        let expected = match raw.direction {
            Direction::Horizontal => Coord::new(a.row, a.col + 1),
            Direction::Vertical => Coord::new(a.row + 1, a.col),
        };
        if !a.is_adjacent(b) {
            return Err(reject("cells are not adjacent"));
        }
        if b != expected {
            return Err(reject("direction does not match the cells"));
        }

        Ok(Self {
            cells: raw.cells,
            direction: raw.direction,
        })
    }
}

impl ConstraintPair {
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self {
            cells: [Coord::new(row, col), Coord::new(row, col + 1)],
            direction: Direction::Horizontal,
        }
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Self {
            cells: [Coord::new(row, col), Coord::new(row + 1, col)],
            direction: Direction::Vertical,
        }
    }

    pub fn first(&self) -> Coord {
        self.cells[0]
    }

    pub fn second(&self) -> Coord {
        self.cells[1]
    }

    /// Relation the two cells hold in a complete grid
    pub fn kind_in(&self, grid: &Grid) -> Option<ConstraintKind> {
        match (grid.get(self.first()), grid.get(self.second())) {
            (Some(a), Some(b)) if a == b => Some(ConstraintKind::Equals),
            (Some(_), Some(_)) => Some(ConstraintKind::Opposite),
            _ => None,
        }
    }
}

/// Selected relations, one collection per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub equals: Vec<ConstraintPair>,
    pub opposite: Vec<ConstraintPair>,
}

impl ConstraintSet {
    pub fn len(&self) -> usize {
        self.equals.len() + self.opposite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equals.is_empty() && self.opposite.is_empty()
    }

    pub fn clear(&mut self) {
        self.equals.clear();
        self.opposite.clear();
    }

    pub fn push(&mut self, kind: ConstraintKind, pair: ConstraintPair) {
        match kind {
            ConstraintKind::Equals => self.equals.push(pair),
            ConstraintKind::Opposite => self.opposite.push(pair),
        }
    }

    /// Every pair tagged with its kind, equals first
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintKind, &ConstraintPair)> {
        self.equals
            .iter()
            .map(|pair| (ConstraintKind::Equals, pair))
            .chain(self.opposite.iter().map(|pair| (ConstraintKind::Opposite, pair)))
    }
}

/// Derives constraint candidates from a solution and picks a subset
pub struct ConstraintExtractor;

impl ConstraintExtractor {
    /// Every right-neighbor and down-neighbor pair of a complete grid, tagged
    /// by whether the two cells match
    pub fn candidates(solution: &Grid) -> ConstraintSet {
        let horizontal = (0..GRID_SIZE)
            .cartesian_product(0..GRID_SIZE - 1)
            .map(|(row, col)| ConstraintPair::horizontal(row, col));
        let vertical = (0..GRID_SIZE - 1)
            .cartesian_product(0..GRID_SIZE)
            .map(|(row, col)| ConstraintPair::vertical(row, col));

        let mut set = ConstraintSet::default();
        for pair in horizontal.chain(vertical) {
            if let Some(kind) = pair.kind_in(solution) {
                set.push(kind, pair);
            }
        }
        set
    }

    /// Pick at most `max_constraints` pairs at random.
    ///
    /// One pair of each kind is seeded first when the candidates hold it and the
    /// cap leaves room for both; the rest is a prefix of the shuffled remainder.
    pub fn select<R: Rng + ?Sized>(
        candidates: &ConstraintSet,
        max_constraints: usize,
        rng: &mut R,
    ) -> ConstraintSet {
        let mut equals = candidates.equals.clone();
        let mut opposite = candidates.opposite.clone();
        equals.shuffle(rng);
        opposite.shuffle(rng);

        let mut selected = ConstraintSet::default();
        let mut remainder: Vec<(ConstraintKind, ConstraintPair)> = Vec::new();

        let seeds = [
            (ConstraintKind::Equals, equals),
            (ConstraintKind::Opposite, opposite),
        ];
        let room_for_both = max_constraints >= seeds.len();

        for (kind, pairs) in seeds {
            let mut pairs = pairs.into_iter();
            if room_for_both {
                if let Some(pair) = pairs.next() {
                    selected.push(kind, pair);
                }
            }
            remainder.extend(pairs.map(|pair| (kind, pair)));
        }

        remainder.shuffle(rng);
        let room = max_constraints.saturating_sub(selected.len());
        for (kind, pair) in remainder.into_iter().take(room) {
            selected.push(kind, pair);
        }

        debug!(
            "Selected {} equals and {} opposite constraints out of {} candidates",
            selected.equals.len(),
            selected.opposite.len(),
            candidates.len()
        );
        selected
    }
}
