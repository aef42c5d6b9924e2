use crate::engine::{Cell, Grid, Point};
use crate::error::{MazeError, Result};

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice in the input array represents a row of the maze, starting
/// from row 0. All rows must have the same number of characters.
///
/// Valid characters for cells are:
/// - 'W': `Cell::Wall`
/// - ' ': `Cell::Open`
/// - 'E': `Cell::Exit`
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the maze.
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(MazeError::InvalidCell)` if an unrecognized character is encountered.
/// * `Err(MazeError::InvalidMaze)` if the maze is empty, ragged, or contains
///   search markers ('V' or '.').
///
/// # Examples
/// ```
/// use maze_solver::engine::Cell;
/// use maze_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["WWW", "W E", "WWW"]).unwrap();
/// assert_eq!(grid.read(1, 1).unwrap(), Cell::Open);
/// assert_eq!(grid.read(1, 2).unwrap(), Cell::Exit);
///
/// assert!(grid_from_str_array(&["WXW"]).is_err());
/// assert!(grid_from_str_array(&["WWW", "WW"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid> {
    let mut maze = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let row = row_str
            .chars()
            .enumerate()
            .map(|(c, character)| {
                Cell::from_char(character).ok_or(MazeError::InvalidCell {
                    character,
                    row: r,
                    column: c,
                })
            })
            .collect::<Result<Vec<Cell>>>()?;
        maze.push(row);
    }

    Grid::new(&maze)
}

/// Parses a maze from text, one row per line.
///
/// Spaces are significant, so lines are not trimmed; only `\r` line endings
/// and trailing blank lines are dropped.
pub fn parse_maze(text: &str) -> Result<Grid> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }
    grid_from_str_array(&lines)
}

/// Built-in mazes, handy for demos and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleMaze {
    /// 7x10 maze with a single exit at (4, 8).
    Simple,
    /// 11x15 maze with a single exit at (8, 13).
    Complex,
}

const SIMPLE_ROWS: [&str; 7] = [
    "WWWWWWWWWW",
    "W        W",
    "W WWWWWW W",
    "W W      W",
    "W W WWWWEW",
    "W        W",
    "WWWWWWWWWW",
];

const COMPLEX_ROWS: [&str; 11] = [
    "WWWWWWWWWWWWWWW",
    "W   W         W",
    "W W W WWWWWWW W",
    "W W   W     W W",
    "W WWWWW WWW W W",
    "W       W   W W",
    "WWWWWWW W WWW W",
    "W     W       W",
    "W WWW WWWWWWWEW",
    "W             W",
    "WWWWWWWWWWWWWWW",
];

impl SampleMaze {
    pub fn name(&self) -> &'static str {
        match self {
            SampleMaze::Simple => "Simple",
            SampleMaze::Complex => "Complex",
        }
    }

    /// The maze rows in text form.
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            SampleMaze::Simple => &SIMPLE_ROWS,
            SampleMaze::Complex => &COMPLEX_ROWS,
        }
    }

    /// The suggested start position.
    pub fn start(&self) -> Point {
        Point::new(1, 1)
    }

    pub fn grid(&self) -> Result<Grid> {
        grid_from_str_array(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_str_array_valid() {
        let grid = grid_from_str_array(&["WWWW", "W EW", "WWWW"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.read(0, 0).unwrap(), Cell::Wall);
        assert_eq!(grid.read(1, 1).unwrap(), Cell::Open);
        assert_eq!(grid.read(1, 2).unwrap(), Cell::Exit);
    }

    #[test]
    fn test_grid_from_str_array_invalid_char() {
        let result = grid_from_str_array(&["WWW", "W#W"]);
        assert_eq!(
            result.unwrap_err(),
            MazeError::InvalidCell {
                character: '#',
                row: 1,
                column: 1
            }
        );
    }

    #[test]
    fn test_grid_from_str_array_rejects_markers() {
        let result = grid_from_str_array(&["WVW"]);
        assert!(matches!(result, Err(MazeError::InvalidMaze(_))));
    }

    #[test]
    fn test_grid_from_str_array_ragged() {
        let result = grid_from_str_array(&["WWWW", "W W"]);
        assert!(result.unwrap_err().to_string().contains("row 1 has 3 cells"));
    }

    #[test]
    fn test_grid_from_str_array_empty_input() {
        let rows: [&str; 0] = [];
        assert!(matches!(
            grid_from_str_array(&rows),
            Err(MazeError::InvalidMaze(_))
        ));
    }

    #[test]
    fn test_parse_maze_keeps_spaces() {
        let grid = parse_maze("WWW\r\nW  \r\nWEW\n\n").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.read(1, 2).unwrap(), Cell::Open);
        assert_eq!(grid.read(2, 1).unwrap(), Cell::Exit);
    }

    #[test]
    fn test_parse_maze_blank_line_inside_is_ragged() {
        assert!(parse_maze("WWW\n\nWWW\n").is_err());
    }

    #[test]
    fn test_sample_mazes_are_valid() {
        for sample in [SampleMaze::Simple, SampleMaze::Complex] {
            let grid = sample.grid().unwrap();
            let start = sample.start();
            assert_eq!(grid.read(start.row, start.column).unwrap(), Cell::Open);
            let exits = grid
                .snapshot()
                .iter()
                .flatten()
                .filter(|&&cell| cell == Cell::Exit)
                .count();
            assert_eq!(exits, 1, "{} maze should have one exit", sample.name());
        }
        assert_eq!(SampleMaze::Simple.grid().unwrap().columns(), 10);
        assert_eq!(SampleMaze::Complex.grid().unwrap().rows(), 11);
        assert_eq!(SampleMaze::Complex.grid().unwrap().read(8, 13).unwrap(), Cell::Exit);
    }
}
