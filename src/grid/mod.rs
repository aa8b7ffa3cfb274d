//! Grid core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::{Cell, Coord, Grid, Line, Symbol, CELL_COUNT, GRID_SIZE, PER_LINE};
pub use rules::GridRules;
pub use io::{
    create_example_grids, grid_to_string, load_grid_from_file, parse_grid_from_string,
    save_grid_to_file,
};
