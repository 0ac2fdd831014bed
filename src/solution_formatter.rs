use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::map_formatter::MapFormatter;
use crate::moves::Actions;
use crate::state::State;

/// Replays actions from the initial state and draws every state on the way,
/// each followed by an empty line.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_state: &'a State,
    actions: &'a Actions,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(
        board: &'a Board,
        initial_state: &'a State,
        actions: &'a Actions,
        format: Format,
    ) -> Self {
        Self {
            board,
            initial_state,
            actions,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            MapFormatter::new(self.board, self.initial_state, self.format)
        )?;
        let mut last_state = self.initial_state.clone();
        for action in self.actions {
            // actions from a different puzzle can name cars that don't exist here
            let new_state = match last_state.apply(action) {
                Some(state) => state,
                None => return writeln!(f, "Unknown car in action {}", action),
            };
            writeln!(
                f,
                "{}",
                MapFormatter::new(self.board, &new_state, self.format)
            )?;
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::moves::Action;
    use crate::puzzle::{grid, Puzzle};
    use crate::solver;

    #[test]
    fn replaying() {
        let puzzle: Puzzle = r"
||||||
|..B.|
|**B.@
|....|
|.AA.|
||||||
"
        .parse()
        .unwrap();
        // B is vertical so moving by 12 on a 6x6 board is two rows down
        let actions = Actions::new(vec![
            Action::new('A', -1),
            Action::new('B', 12),
            Action::new('*', 3),
        ]);
        assert_eq!(solver::solve(&puzzle), actions);

        let expected = r"
||||||
|..B.|
|**B.@
|....|
|.AA.|
||||||

||||||
|..B.|
|**B.@
|....|
|AA..|
||||||

||||||
|....|
|**..@
|..B.|
|AAB.|
||||||

||||||
|....|
|...**
|..B.|
|AAB.|
||||||

";
        let formatter = SolutionFormatter::new(&puzzle.board, &puzzle.state, &actions, Format::Compact);
        assert_eq!(formatter.to_string(), expected.trim_start_matches('\n'));
    }

    #[test]
    fn unknown_car() {
        let puzzle = grid(5, vec![('*', vec![11, 12])]).unwrap();
        let actions = Actions::new(vec![Action::new('Q', 1)]);
        let formatter = SolutionFormatter::new(&puzzle.board, &puzzle.state, &actions, Format::Compact);
        assert!(formatter.to_string().ends_with("Unknown car in action Q+1\n"));
    }
}
