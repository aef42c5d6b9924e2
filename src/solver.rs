//! Depth-first maze search with an explicit, resumable step protocol.
//!
//! `MazeSolver::step` advances the search by exactly one move (a push onto
//! the path or a backtracking pop) and returns a snapshot of the maze at that
//! instant, so a driver can replay the search at its own pace.
//! `MazeSolver::run_to_completion` simply loops `step` until the search ends.
use crate::engine::{Cell, Grid, Point};
use crate::error::{MazeError, Result};
use crate::stack::PathStack;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// Neighbor probe order: Down, Right, Left, Up.
///
/// This order decides which route is found first when several exist.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

const NO_EXIT_MESSAGE: &str = "No exit found";

/// Where the search is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchState {
    NotStarted,
    Searching,
    /// An exit was reached and the route has been marked on the grid.
    Found,
    /// Every reachable cell was explored without reaching an exit.
    Exhausted,
}

impl SearchState {
    /// `Found` and `Exhausted` are final; `step` does nothing afterwards.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// An independent copy of the solver's observable state after one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: SearchState,
    /// Deep copy of the working grid, including search markers.
    pub grid: Vec<Vec<Cell>>,
    /// Top of the path, or `None` once the search is exhausted.
    pub current_position: Option<Point>,
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The path from top to bottom. Once `found` is set this reads start to exit.
    pub path: Vec<Point>,
}

impl Snapshot {
    /// Renders the grid as newline-joined rows of cell characters.
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of running a search to the end.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The terminal snapshot.
    pub snapshot: Snapshot,
    /// Number of transitions performed, including the initial one.
    pub steps_taken: usize,
    /// Human-readable trace listing every point of the route, start first.
    pub message: String,
}

/// Depth-first search over a single maze.
///
/// The solver exclusively owns its `Grid` and its path stack; callers only
/// ever see copies.
///
/// # Examples
/// ```
/// use maze_solver::solver::{MazeSolver, SearchState};
/// use maze_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&[
///     "WWWWW",
///     "W   W",
///     "W WEW",
///     "WWWWW",
/// ]).unwrap();
/// let mut solver = MazeSolver::new(1, 1, grid).unwrap();
///
/// let first = solver.step().unwrap().unwrap();
/// assert_eq!(first.state, SearchState::Searching);
///
/// let solution = solver.run_to_completion().unwrap();
/// assert!(solution.snapshot.found);
/// assert_eq!(solution.snapshot.path.last().unwrap().to_string(), "[2, 3]");
/// ```
#[derive(Clone, Debug)]
pub struct MazeSolver {
    grid: Grid,
    starting_point: Point,
    path: PathStack,
    exit_found: bool,
    state: SearchState,
    status_message: Option<String>,
    steps_taken: usize,
}

impl MazeSolver {
    /// Creates a solver that will search `grid` from (`start_row`, `start_column`).
    ///
    /// # Returns
    /// * `Err(MazeError::InvalidStart)` if the start lies outside the grid or on
    ///   a `Wall` or `Exit` cell.
    pub fn new(start_row: usize, start_column: usize, grid: Grid) -> Result<Self> {
        let starting_point = Point::new(start_row, start_column);
        let invalid = |reason| MazeError::InvalidStart {
            row: start_row,
            column: start_column,
            reason,
        };

        if !grid.contains(starting_point) {
            return Err(invalid("outside the maze"));
        }
        match grid.read(start_row, start_column)? {
            Cell::Wall => return Err(invalid("cannot start on a wall")),
            Cell::Exit => return Err(invalid("cannot start on the exit")),
            _ => {}
        }

        Ok(MazeSolver {
            grid,
            starting_point,
            path: PathStack::new(),
            exit_found: false,
            state: SearchState::NotStarted,
            status_message: None,
            steps_taken: 0,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn starting_point(&self) -> Point {
        self.starting_point
    }

    pub fn exit_found(&self) -> bool {
        self.exit_found
    }

    /// Number of transitions performed since construction or the last reset.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Performs one search transition and returns the resulting snapshot.
    ///
    /// The first call enters the start cell. Each later call either moves onto
    /// the first `Open` or `Exit` neighbor (probing Down, Right, Left, Up) or
    /// backtracks one cell. Returns `Ok(None)` once the search has reached
    /// `Found` or `Exhausted`.
    pub fn step(&mut self) -> Result<Option<Snapshot>> {
        match self.state {
            SearchState::NotStarted => self.enter_start()?,
            SearchState::Searching => self.advance()?,
            SearchState::Found | SearchState::Exhausted => return Ok(None),
        }
        self.steps_taken += 1;
        Ok(Some(self.snapshot()))
    }

    fn enter_start(&mut self) -> Result<()> {
        let start = self.starting_point;
        self.path.push(start);
        self.grid.write(start.row, start.column, Cell::Visited)?;
        self.state = SearchState::Searching;
        debug!("search started at {}", start);
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        let current = self.path.top()?;

        match self.first_open_neighbor(current)? {
            Some(next) => {
                self.path.push(next);
                if self.grid.read(next.row, next.column)? == Cell::Exit {
                    self.exit_found = true;
                } else {
                    self.grid.write(next.row, next.column, Cell::Visited)?;
                }
                trace!("{} -> {}", current, next);
            }
            None => {
                self.path.pop()?;
                trace!("backtrack from {}", current);
            }
        }

        if self.exit_found {
            self.mark_route()?;
            self.state = SearchState::Found;
            self.status_message = Some(format!(
                "Path found! {} steps from Start to Exit.",
                self.path.len()
            ));
            info!(
                "exit found after {} steps, route has {} cells",
                self.steps_taken + 1,
                self.path.len()
            );
        } else if self.path.is_empty() {
            self.state = SearchState::Exhausted;
            self.status_message = Some(NO_EXIT_MESSAGE.to_string());
            info!("no exit reachable from {}", self.starting_point);
        }
        Ok(())
    }

    /// Returns the first neighbor of `current`, in probe order, that the
    /// search may enter. Neighbors outside the grid count as blocked.
    fn first_open_neighbor(&self, current: Point) -> Result<Option<Point>> {
        for (d_row, d_column) in NEIGHBOR_OFFSETS {
            let neighbor = match current.offset(d_row, d_column) {
                Some(p) if self.grid.contains(p) => p,
                _ => continue,
            };
            if self.grid.read(neighbor.row, neighbor.column)?.is_passable() {
                return Ok(Some(neighbor));
            }
        }
        Ok(None)
    }

    /// Marks every cell of the current path except the exit as `PathMarked`
    /// and flips the path so it reads from start (top) to exit (bottom).
    fn mark_route(&mut self) -> Result<()> {
        let route = self.path.copy(self.path.len(), true)?;
        for point in route.iter() {
            if self.grid.read(point.row, point.column)? != Cell::Exit {
                self.grid.write(point.row, point.column, Cell::PathMarked)?;
            }
        }
        self.path = route;
        Ok(())
    }

    /// Builds a snapshot of the current state without advancing the search.
    pub fn snapshot(&self) -> Snapshot {
        let (current_position, path) = match self.state {
            SearchState::Searching | SearchState::Found => {
                (self.path.top().ok(), self.path.to_vec())
            }
            SearchState::NotStarted | SearchState::Exhausted => (None, Vec::new()),
        };

        Snapshot {
            state: self.state,
            grid: self.grid.snapshot(),
            current_position,
            found: self.state == SearchState::Found,
            message: self.status_message.clone(),
            path,
        }
    }

    /// Steps until the search ends and returns the terminal snapshot with a
    /// trace of the route.
    ///
    /// Calling this on a solver that has already finished returns the same
    /// terminal result again.
    pub fn run_to_completion(&mut self) -> Result<Solution> {
        while self.step()?.is_some() {}

        Ok(Solution {
            snapshot: self.snapshot(),
            steps_taken: self.steps_taken,
            message: self.route_message(),
        })
    }

    /// Steps until the search ends, collecting every snapshot in order.
    pub fn trace(&mut self) -> Result<Vec<Snapshot>> {
        let mut snapshots = Vec::new();
        while let Some(snapshot) = self.step()? {
            snapshots.push(snapshot);
        }
        Ok(snapshots)
    }

    fn route_message(&self) -> String {
        if self.state != SearchState::Found {
            return "No exit found in maze!".to_string();
        }

        let route = self.path.to_vec();
        let exit = route.last().copied().unwrap_or(self.starting_point);
        let mut message = format!(
            "Path to follow from Start {} to Exit {} - {} steps:\n",
            self.starting_point,
            exit,
            route.len()
        );
        for point in &route {
            message.push_str(&format!("{}\n", point));
        }
        message
    }

    /// Returns a copy of the live path, top first.
    ///
    /// # Returns
    /// * `Err(MazeError::NotSearched)` if no step has been taken yet.
    pub fn current_path(&self) -> Result<PathStack> {
        if self.state == SearchState::NotStarted {
            return Err(MazeError::NotSearched);
        }
        self.path.copy(self.path.len(), false)
    }

    /// Restores the original grid and forgets all search progress.
    pub fn reset(&mut self) {
        self.grid.reset_to_original();
        self.path.clear();
        self.exit_found = false;
        self.state = SearchState::NotStarted;
        self.status_message = None;
        self.steps_taken = 0;
        debug!("solver reset, start {}", self.starting_point);
    }
}
