//! Grid model for the maze engine.
//!
//! This module defines the values the solver works on:
//! - `Cell`: The symbol stored at each maze position.
//! - `Point`: An immutable (row, column) coordinate.
//! - `Grid`: The maze itself, holding the untouched original layout and a
//!   working copy that the search marks up as it goes.
use crate::error::{MazeError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the state of a single maze position.
///
/// `Wall` and `Exit` never change during a search. `Open` cells become
/// `Visited` when explored, and visited cells on the recovered route become
/// `PathMarked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Free cell that has not been explored yet.
    Open,
    /// Target cell; reaching one ends the search.
    Exit,
    /// Cell the search has already entered.
    Visited,
    /// Cell on the final start-to-exit route.
    PathMarked,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_solver::engine::Cell;
    /// assert_eq!(Cell::Wall.to_char(), 'W');
    /// assert_eq!(Cell::Open.to_char(), ' ');
    /// assert_eq!(Cell::PathMarked.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Wall => 'W',
            Cell::Open => ' ',
            Cell::Exit => 'E',
            Cell::Visited => 'V',
            Cell::PathMarked => '.',
        }
    }

    /// Parses a cell from its character representation.
    ///
    /// Returns `None` for characters that do not name a cell.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'W' => Some(Cell::Wall),
            ' ' => Some(Cell::Open),
            'E' => Some(Cell::Exit),
            'V' => Some(Cell::Visited),
            '.' => Some(Cell::PathMarked),
            _ => None,
        }
    }

    /// Returns `true` if the search may step onto this cell.
    pub fn is_passable(&self) -> bool {
        matches!(self, Cell::Open | Cell::Exit)
    }

    /// Returns the ANSI background color code used for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Cell::Wall => "40",
            Cell::Open => "47",
            Cell::Exit => "42",
            Cell::Visited => "44",
            Cell::PathMarked => "43",
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        cell.to_char()
    }
}

impl TryFrom<char> for Cell {
    type Error = MazeError;

    fn try_from(c: char) -> Result<Cell> {
        Cell::from_char(c).ok_or(MazeError::InvalidCell {
            character: c,
            row: 0,
            column: 0,
        })
    }
}

/// An immutable maze coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Point { row, column }
    }

    /// Returns the point shifted by the given signed offsets, or `None` if
    /// either coordinate would become negative.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::engine::Point;
    /// let p = Point::new(1, 0);
    /// assert_eq!(p.offset(1, 0), Some(Point::new(2, 0)));
    /// assert_eq!(p.offset(0, -1), None);
    /// ```
    pub fn offset(&self, d_row: isize, d_column: isize) -> Option<Point> {
        Some(Point {
            row: self.row.checked_add_signed(d_row)?,
            column: self.column.checked_add_signed(d_column)?,
        })
    }

    /// Returns `true` if `other` is one step up, down, left or right of `self`.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

/// The maze being searched.
///
/// `original` keeps the layout exactly as supplied so the search can be
/// replayed after a reset; `working` carries the `Visited`/`PathMarked`
/// markers written during the search. Both are always rectangular.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    original: Vec<Vec<Cell>>,
    working: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid from a rectangular layout of `Wall`, `Open` and `Exit` cells.
    ///
    /// The input is deep-copied; later changes to `maze` do not affect the grid.
    ///
    /// # Arguments
    /// * `maze`: The rows of the maze, top to bottom.
    ///
    /// # Returns
    /// * `Ok(Grid)` with `working` equal to `original`.
    /// * `Err(MazeError::InvalidMaze)` if the maze has no rows, a row is empty,
    ///   rows differ in length, or a row already contains `Visited` or
    ///   `PathMarked` markers.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::engine::{Cell, Grid};
    /// let grid = Grid::new(&[vec![Cell::Wall, Cell::Open, Cell::Exit]]).unwrap();
    /// assert_eq!(grid.rows(), 1);
    /// assert_eq!(grid.columns(), 3);
    /// assert!(Grid::new(&[]).is_err());
    /// ```
    pub fn new(maze: &[Vec<Cell>]) -> Result<Self> {
        let columns = match maze.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(MazeError::InvalidMaze("row 0 is empty".to_string())),
            None => return Err(MazeError::InvalidMaze("maze has no rows".to_string())),
        };

        for (r, row) in maze.iter().enumerate() {
            if row.len() != columns {
                return Err(MazeError::InvalidMaze(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    columns
                )));
            }
            if let Some(c) = row
                .iter()
                .position(|cell| matches!(cell, Cell::Visited | Cell::PathMarked))
            {
                return Err(MazeError::InvalidMaze(format!(
                    "search marker {:?} at row {} col {}",
                    row[c].to_char(),
                    r,
                    c
                )));
            }
        }

        Ok(Grid {
            original: maze.to_vec(),
            working: maze.to_vec(),
        })
    }

    /// Number of rows in the maze.
    pub fn rows(&self) -> usize {
        self.working.len()
    }

    /// Number of columns in the maze.
    pub fn columns(&self) -> usize {
        self.working[0].len()
    }

    /// Returns `true` if `point` lies inside the maze.
    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows() && point.column < self.columns()
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row < self.rows() && column < self.columns() {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row,
                column,
                rows: self.rows(),
                columns: self.columns(),
            })
        }
    }

    /// Returns the current cell at (`row`, `column`).
    ///
    /// # Returns
    /// * `Ok(Cell)` with the working state of the cell.
    /// * `Err(MazeError::OutOfBounds)` if the coordinate is outside the maze.
    pub fn read(&self, row: usize, column: usize) -> Result<Cell> {
        self.check_bounds(row, column)?;
        Ok(self.working[row][column])
    }

    /// Stores `cell` at (`row`, `column`).
    ///
    /// An `Exit` cell is never overwritten: writing anything other than `Exit`
    /// over it leaves the exit in place and still returns `Ok(())`.
    ///
    /// # Returns
    /// * `Err(MazeError::OutOfBounds)` if the coordinate is outside the maze.
    pub fn write(&mut self, row: usize, column: usize, cell: Cell) -> Result<()> {
        self.check_bounds(row, column)?;
        let slot = &mut self.working[row][column];
        if *slot == Cell::Exit && cell != Cell::Exit {
            debug!("refusing to overwrite exit at [{}, {}] with {:?}", row, column, cell);
            return Ok(());
        }
        *slot = cell;
        Ok(())
    }

    /// Returns a deep copy of the working cells, safe to keep after the
    /// search moves on.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.working.clone()
    }

    /// Returns the layout exactly as it was supplied.
    pub fn original(&self) -> &[Vec<Cell>] {
        &self.original
    }

    /// Discards all search markers by restoring the original layout.
    pub fn reset_to_original(&mut self) {
        self.working.clone_from(&self.original);
    }

    /// Generates an ANSI-colored view of the grid, two terminal columns per cell.
    ///
    /// Walls are black, open cells white, exits green, visited cells blue and
    /// path cells yellow. If `current` is `Some`, that cell is drawn red.
    ///
    /// # Arguments
    /// * `current`: The position to highlight, typically the top of the search path.
    pub fn render_with_highlight(&self, current: Option<Point>) -> String {
        let mut output = String::new();

        for (r_idx, row) in self.working.iter().enumerate() {
            for (c_idx, cell) in row.iter().enumerate() {
                let is_current = current.map_or(false, |p| p.row == r_idx && p.column == c_idx);
                let color_code = if is_current {
                    "41"
                } else {
                    cell.to_ansi_color_code()
                };
                output.push_str(&format!("\x1b[1;{};m  \x1b[m", color_code));
            }
            if r_idx < self.rows() - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Grid {
    /// Writes the working cells row by row as characters, rows joined by `'\n'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.working.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_from_str_array;

    fn small_grid() -> Grid {
        grid_from_str_array(&["WWWW", "W EW", "WWWW"]).unwrap()
    }

    #[test]
    fn test_cell_char_conversion() {
        for cell in [
            Cell::Wall,
            Cell::Open,
            Cell::Exit,
            Cell::Visited,
            Cell::PathMarked,
        ] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('X'), None);
        assert!(Cell::try_from('?').is_err());
    }

    #[test]
    fn test_cell_is_passable() {
        assert!(Cell::Open.is_passable());
        assert!(Cell::Exit.is_passable());
        assert!(!Cell::Wall.is_passable());
        assert!(!Cell::Visited.is_passable());
        assert!(!Cell::PathMarked.is_passable());
    }

    #[test]
    fn test_point_display_and_equality() {
        let p = Point::new(4, 8);
        assert_eq!(p.to_string(), "[4, 8]");
        assert_eq!(p, Point { row: 4, column: 8 });
        assert_ne!(p, Point::new(8, 4));
    }

    #[test]
    fn test_point_offset_and_adjacency() {
        let origin = Point::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, 1), Some(Point::new(0, 1)));
        assert!(origin.is_adjacent(&Point::new(1, 0)));
        assert!(!origin.is_adjacent(&Point::new(1, 1)));
        assert!(!origin.is_adjacent(&origin));
    }

    #[test]
    fn test_new_rejects_empty_and_ragged() {
        assert!(matches!(Grid::new(&[]), Err(MazeError::InvalidMaze(_))));
        assert!(matches!(
            Grid::new(&[Vec::new()]),
            Err(MazeError::InvalidMaze(_))
        ));
        let ragged = vec![vec![Cell::Wall, Cell::Wall], vec![Cell::Wall]];
        let err = Grid::new(&ragged).unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidMaze("row 1 has 1 cells, expected 2".to_string())
        );
    }

    #[test]
    fn test_new_rejects_search_markers() {
        let marked = vec![vec![Cell::Wall, Cell::Visited]];
        assert!(matches!(Grid::new(&marked), Err(MazeError::InvalidMaze(_))));
    }

    #[test]
    fn test_read_write_bounds() {
        let mut grid = small_grid();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.read(1, 1).unwrap(), Cell::Open);
        assert_eq!(
            grid.read(3, 0),
            Err(MazeError::OutOfBounds {
                row: 3,
                column: 0,
                rows: 3,
                columns: 4
            })
        );
        assert!(grid.read(0, 4).is_err());
        assert!(grid.write(0, 4, Cell::Visited).is_err());

        grid.write(1, 1, Cell::Visited).unwrap();
        assert_eq!(grid.read(1, 1).unwrap(), Cell::Visited);
    }

    #[test]
    fn test_write_never_overwrites_exit() {
        let mut grid = small_grid();
        grid.write(1, 2, Cell::Visited).unwrap();
        grid.write(1, 2, Cell::PathMarked).unwrap();
        assert_eq!(grid.read(1, 2).unwrap(), Cell::Exit);
        grid.write(1, 2, Cell::Exit).unwrap();
        assert_eq!(grid.read(1, 2).unwrap(), Cell::Exit);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid = small_grid();
        let mut snap = grid.snapshot();
        snap[1][1] = Cell::Wall;
        assert_eq!(grid.read(1, 1).unwrap(), Cell::Open);

        grid.write(1, 1, Cell::Visited).unwrap();
        assert_eq!(snap[1][1], Cell::Wall);
    }

    #[test]
    fn test_reset_to_original() {
        let mut grid = small_grid();
        grid.write(1, 1, Cell::Visited).unwrap();
        grid.reset_to_original();
        assert_eq!(grid.read(1, 1).unwrap(), Cell::Open);
        assert_eq!(grid.snapshot(), grid.original().to_vec());
    }

    #[test]
    fn test_display_joins_rows() {
        let mut grid = small_grid();
        grid.write(1, 1, Cell::PathMarked).unwrap();
        assert_eq!(grid.to_string(), "WWWW\nW.EW\nWWWW");
    }

    #[test]
    fn test_render_with_highlight() {
        let grid = small_grid();
        let plain = grid.render_with_highlight(None);
        assert_eq!(plain.lines().count(), 3);
        assert!(!plain.contains("[1;41;m"));

        let highlighted = grid.render_with_highlight(Some(Point::new(1, 1)));
        assert_eq!(highlighted.matches("[1;41;m").count(), 1);
    }

    #[test]
    fn test_cell_serializes_as_char() {
        let json = serde_json::to_string(&vec![Cell::Wall, Cell::Open, Cell::Exit]).unwrap();
        assert_eq!(json, r#"["W"," ","E"]"#);
        let back: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Cell::Wall, Cell::Open, Cell::Exit]);
    }
}
