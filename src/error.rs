//! Error type shared by the grid, the path stack and the solver.

use thiserror::Error;

/// Every failure the maze engine can report.
///
/// All variants are precondition violations detected locally; the engine does
/// no I/O, so nothing here is transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// `top` or `pop` was called on an empty [`PathStack`](crate::stack::PathStack).
    #[error("path stack is empty")]
    EmptyStack,

    /// A grid access fell outside the maze dimensions.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} maze")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// `PathStack::copy` asked for more points than the stack holds.
    #[error("cannot copy {requested} points from a stack of {size}")]
    Range { requested: usize, size: usize },

    /// The supplied maze is empty, ragged or contains search markers.
    #[error("invalid maze: {0}")]
    InvalidMaze(String),

    /// A character in a text maze does not name a cell.
    #[error("unrecognized cell character {character:?} at row {row} col {column}")]
    InvalidCell {
        character: char,
        row: usize,
        column: usize,
    },

    /// The start coordinate is out of bounds or sits on a wall or exit.
    #[error("invalid start ({row}, {column}): {reason}")]
    InvalidStart {
        row: usize,
        column: usize,
        reason: &'static str,
    },

    /// The path was requested before any search step ran.
    #[error("search has not been performed yet")]
    NotSearched,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MazeError>;
