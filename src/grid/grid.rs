//! Grid representation and utilities for the 6x6 two-symbol puzzle

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the puzzle grid
pub const GRID_SIZE: usize = 6;

/// Total number of cells in the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Occurrences of each symbol in a complete row or column
pub const PER_LINE: usize = GRID_SIZE / 2;

/// One of the two interchangeable markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Sun,
    Moon,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::Sun, Symbol::Moon];

    /// The other symbol
    pub fn other(self) -> Self {
        match self {
            Symbol::Sun => Symbol::Moon,
            Symbol::Moon => Symbol::Sun,
        }
    }

    /// Single-character form used in text grids
    pub fn to_char(self) -> char {
        match self {
            Symbol::Sun => 'A',
            Symbol::Moon => 'B',
        }
    }
}

/// A grid cell: a symbol or empty
pub type Cell = Option<Symbol>;

/// Row/column position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major position to coordinates
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    /// True when both row and column lie inside the grid
    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// True when the two coordinates share an edge
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// All 36 coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A row or a column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
}

impl Line {
    /// Every row followed by every column
    pub fn all() -> impl Iterator<Item = Line> {
        (0..GRID_SIZE)
            .map(Line::Row)
            .chain((0..GRID_SIZE).map(Line::Column))
    }

    /// Coordinate of the `offset`-th cell along this line
    #[inline]
    pub fn coord(self, offset: usize) -> Coord {
        match self {
            Line::Row(row) => Coord::new(row, offset),
            Line::Column(col) => Coord::new(offset, col),
        }
    }

    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).map(move |offset| self.coord(offset))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
        }
    }
}

/// A 6x6 grid of cells, partial or complete
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Cells of a line, in order
    pub fn line(&self, line: Line) -> [Cell; GRID_SIZE] {
        let mut out = [None; GRID_SIZE];
        for (offset, slot) in out.iter_mut().enumerate() {
            *slot = self.get(line.coord(offset));
        }
        out
    }

    /// Occurrences of `symbol` in a line
    pub fn count_in_line(&self, line: Line, symbol: Symbol) -> usize {
        line.coords()
            .filter(|&coord| self.get(coord) == Some(symbol))
            .count()
    }

    /// Empty cells in a line
    pub fn empty_in_line(&self, line: Line) -> usize {
        line.coords().filter(|&coord| self.get(coord).is_none()).count()
    }

    /// Total filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Occurrences of `symbol` anywhere in the grid
    pub fn count_symbol(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(symbol))
            .count()
    }

    /// True when no cell is empty
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Coordinates of filled cells in row-major order
    pub fn filled_coords(&self) -> Vec<Coord> {
        Coord::all().filter(|&coord| self.get(coord).is_some()).collect()
    }

    /// All coordinates in uniformly random order
    pub fn shuffled_coords<R: Rng + ?Sized>(rng: &mut R) -> Vec<Coord> {
        let mut coords: Vec<Coord> = Coord::all().collect();
        coords.shuffle(rng);
        coords
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Some(Symbol::Sun) => "☀️",
                    Some(Symbol::Moon) => "🌙",
                    None => "⬜",
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
