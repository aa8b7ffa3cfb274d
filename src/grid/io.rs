//! File I/O operations for puzzle grids

use super::{Cell, Coord, Grid, Symbol, GRID_SIZE};
use crate::error::{PuzzleError, PuzzleResult};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file
/// Format: six lines of six characters, 'A'/'B' (or '0'/'1') for symbols and '.' for empty
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> PuzzleResult<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != GRID_SIZE {
        return Err(PuzzleError::BadDimensions {
            expected: GRID_SIZE,
            detail: format!("{} rows", lines.len()),
        });
    }

    let mut grid = Grid::empty();

    for (row, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != GRID_SIZE {
            return Err(PuzzleError::BadDimensions {
                expected: GRID_SIZE,
                detail: format!("row {} with {} cells", row, width),
            });
        }

        for (col, ch) in line.chars().enumerate() {
            grid.set(Coord::new(row, col), parse_cell(ch, row, col)?);
        }
    }

    Ok(grid)
}

fn parse_cell(ch: char, row: usize, col: usize) -> PuzzleResult<Cell> {
    match ch {
        'A' | 'a' | '0' => Ok(Some(Symbol::Sun)),
        'B' | 'b' | '1' => Ok(Some(Symbol::Moon)),
        '.' | '_' => Ok(None),
        found => Err(PuzzleError::InvalidSymbol { found, row, col }),
    }
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));

    for row in grid.rows() {
        for cell in row {
            result.push(cell.map_or('.', Symbol::to_char));
        }
        result.push('\n');
    }

    result
}

/// Create example grid files for testing
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // A complete, rule-abiding grid
    let solved_content = "AABABB\nBBABAA\nABBAAB\nBAABBA\nABABAB\nBABABA\n";
    std::fs::write(dir.join("solved.txt"), solved_content)
        .context("Failed to write solved.txt")?;

    // Three suns in a row on the first line
    let broken_content = "AAABBB\nBBBAAA\nABABAB\nBABABA\nABABAB\nBABABA\n";
    std::fs::write(dir.join("broken.txt"), broken_content)
        .context("Failed to write broken.txt")?;

    // Partially filled grid
    let partial_content = "AA....\n......\n..B...\n......\n....A.\n.....B\n";
    std::fs::write(dir.join("partial.txt"), partial_content)
        .context("Failed to write partial.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let content = "AB....\n......\n..0...\n......\n....1.\n.....A\n";
        let grid = parse_grid_from_string(content).unwrap();

        assert_eq!(grid.filled_count(), 5);
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Symbol::Sun));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Symbol::Moon));
        assert_eq!(grid.get(Coord::new(2, 2)), Some(Symbol::Sun));
        assert_eq!(grid.get(Coord::new(4, 4)), Some(Symbol::Moon));
        assert_eq!(grid.get(Coord::new(1, 1)), None);
    }

    #[test]
    fn test_grid_to_string() {
        let mut grid = Grid::empty();
        grid.set(Coord::new(0, 0), Some(Symbol::Sun));
        grid.set(Coord::new(5, 5), Some(Symbol::Moon));

        assert_eq!(
            grid_to_string(&grid),
            "A.....\n......\n......\n......\n......\n.....B\n"
        );
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_grid.txt");

        let original = parse_grid_from_string("AABABB\nBBABAA\nABBAAB\nBAABBA\nABABAB\nBABABA\n").unwrap();
        save_grid_to_file(&original, &file_path).unwrap();
        let loaded = load_grid_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        let invalid = "AX....\n......\n......\n......\n......\n......\n";
        assert_eq!(
            parse_grid_from_string(invalid),
            Err(PuzzleError::InvalidSymbol { found: 'X', row: 0, col: 1 })
        );

        let short_row = "A.....\n....\n......\n......\n......\n......\n";
        assert!(matches!(
            parse_grid_from_string(short_row),
            Err(PuzzleError::BadDimensions { .. })
        ));

        assert!(parse_grid_from_string("").is_err());
        assert!(parse_grid_from_string("......\n......\n").is_err());
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        create_example_grids(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("solved.txt").exists());
        assert!(temp_dir.path().join("broken.txt").exists());
        assert!(temp_dir.path().join("partial.txt").exists());

        let solved = load_grid_from_file(temp_dir.path().join("solved.txt")).unwrap();
        assert!(solved.is_complete());
        let partial = load_grid_from_file(temp_dir.path().join("partial.txt")).unwrap();
        assert_eq!(partial.filled_count(), 5);
    }
}
