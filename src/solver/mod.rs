mod expand;
mod path;
mod search;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Config;
use crate::moves::{Action, Actions};
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

pub use self::expand::successors;
pub use self::path::Path;
pub use self::search::search;
pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    StateLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::StateLimit(max) => {
                write!(f, "Gave up after visiting {} states without a solution", max)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub path: Option<Path<State, Action>>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(path: Option<Path<State, Action>>, stats: Stats) -> Self {
        Self { path, stats }
    }

    /// Empty both when there is no solution and when the puzzle starts solved.
    pub fn actions(&self) -> Actions {
        self.path
            .as_ref()
            .map(|path| Actions::new(path.actions()))
            .unwrap_or_default()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "Actions: {}", path.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve_with(self, config)
    }
}

/// The shortest list of actions that gets the target car onto the goal.
///
/// Empty if the puzzle is already solved or can't be solved.
pub fn solve(puzzle: &Puzzle) -> Actions {
    match solve_with(puzzle, &Config::default()) {
        Ok(solver_ok) => solver_ok.actions(),
        Err(err) => unreachable!("solving without a limit failed: {}", err),
    }
}

fn solve_with(puzzle: &Puzzle, config: &Config) -> Result<SolverOk, SolverErr> {
    debug!(
        "Solving {0}x{0} puzzle with {1} cars",
        puzzle.board.size(),
        puzzle.state.cars().len()
    );

    let board = &puzzle.board;
    let mut stats = Stats::new();
    let path = search::bfs(
        &puzzle.state,
        |state| successors(board, state),
        |state| is_goal(board, state),
        config,
        &mut stats,
    )?;

    match path {
        Some(ref path) => debug!("Found solution with {} actions", path.len()),
        None => debug!("No solution"),
    }
    Ok(SolverOk::new(path, stats))
}

/// The target car covers the goal cell.
pub fn is_goal(board: &Board, state: &State) -> bool {
    state
        .position(board.target())
        .map_or(false, |position| position.contains(board.goal()))
}
