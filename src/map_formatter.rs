use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::data::{EMPTY, GOAL, WALL};
use crate::state::State;

/// Draws a state as a square grid, one character per cell.
///
/// A car on the goal hides the goal marker.
pub struct MapFormatter<'a> {
    board: &'a Board,
    state: &'a State,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub fn new(board: &'a Board, state: &'a State, format: Format) -> Self {
        Self {
            board,
            state,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut chars = self.board.wall_grid().scratchpad(EMPTY);
        for wall in self.board.walls() {
            chars[wall] = WALL;
        }
        chars[self.board.goal()] = GOAL;
        for car in self.state.cars() {
            for &cell in car.position.cells() {
                chars[cell] = car.id.0;
            }
        }

        let separator = match self.format {
            Format::Spaced => " ",
            Format::Compact => "",
        };
        for row in chars.rows() {
            for (c, ch) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "{}", separator)?;
                }
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Renders `state` on `board` the way the parser reads it back.
pub fn show(board: &Board, state: &State, format: Format) -> String {
    MapFormatter::new(board, state, format).to_string()
}
