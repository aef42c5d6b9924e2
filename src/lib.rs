//! # Maze Solver Library
//!
//! This library explores a 2-D grid maze with depth-first search and exposes
//! every step of the search, not just the final answer.
//!
//! It is used by two binaries:
//! - `maze_solver`: Loads a maze and a start position, runs the search to the
//!   end and prints the route, optionally with the full step trace.
//! - `maze_player`: Replays the search one step at a time in the terminal.
//!
//! ## Modules
//! - `engine`: Contains the cell symbols (`Cell`), coordinates (`Point`) and
//!   the maze itself (`Grid`).
//! - `stack`: Provides `PathStack`, the LIFO stack holding the search path.
//! - `solver`: Provides `MazeSolver`, the resumable depth-first search, and the
//!   `Snapshot` records it emits after each step.
//! - `utils`: Parsing of text mazes and the built-in sample mazes.
//! - `error`: The `MazeError` type returned by every fallible operation.

pub mod engine;
pub mod error;
pub mod solver;
pub mod stack;
pub mod utils;

pub use crate::error::{MazeError, Result};
