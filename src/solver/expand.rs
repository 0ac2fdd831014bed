use crate::board::Board;
use crate::moves::Action;
use crate::state::State;

/// Every state reachable by sliding one car along its axis,
/// paired with the action that produced it.
///
/// A car that can slide 3 cells yields 3 states (1, 2 and 3 cells),
/// each action counts as one step regardless of distance.
/// Each returned state differs from `state` in exactly one car's position
/// so no two entries are equal. Order: cars by id, forward before backward,
/// shorter before longer.
pub fn successors(board: &Board, state: &State) -> Vec<(State, Action)> {
    let mut new_states = Vec::new();

    // the goal is not a wall so it's never occupied unless a car is on it
    let mut occupied = board.wall_grid().clone();
    for car in state.cars() {
        for &cell in car.position.cells() {
            occupied[cell] = true;
        }
    }

    for (index, car) in state.cars().iter().enumerate() {
        let axis = car.position.axis(board.size());
        let stride = board.stride(axis) as isize;

        for &forward in &[true, false] {
            let (mut edge, unit) = if forward {
                (car.position.last(), stride)
            } else {
                (car.position.first(), -stride)
            };

            // only the newly entered cell can collide,
            // the rest of the car moves into cells it already occupied
            let mut displacement = 0;
            while let Some(next) = board.step(edge, axis, forward) {
                if occupied[next] {
                    break;
                }
                edge = next;
                displacement += unit;
                let position = car.position.shifted(displacement);
                new_states.push((
                    state.with_position(index, position),
                    Action::new(car.id, displacement),
                ));
            }
        }
    }

    trace!("Expanded into {} states", new_states.len());
    new_states
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::CarId;
    use crate::puzzle::{self, Puzzle};

    fn actions(successors: &[(State, Action)]) -> Vec<String> {
        successors.iter().map(|(_, a)| a.to_string()).collect()
    }

    #[test]
    fn reference_start() {
        let puzzle = puzzle::builtin(1).unwrap();
        let next = successors(&puzzle.board, &puzzle.state);
        assert_eq!(
            actions(&next),
            vec!["A-1", "A-2", "A-3", "B+8", "B+16", "B-8", "G+1", "G+2", "G+3", "Y+8"]
        );

        let (moved, _) = &next[2];
        assert_eq!(moved.position(CarId('A')).unwrap().cells(), &[42, 43]);
        for car in puzzle.state.cars().iter().filter(|car| car.id != CarId('A')) {
            assert_eq!(moved.car(car.id), Some(car));
        }
    }

    #[test]
    fn boxed_in() {
        let puzzle: Puzzle = r"
|||||
|.B.|
|*B.@
|.B.|
|||||
"
        .parse()
        .unwrap();
        assert!(successors(&puzzle.board, &puzzle.state).is_empty());
    }

    #[test]
    fn onto_goal_but_not_off_the_board() {
        // goal is 14, right of it is the next row
        let puzzle = puzzle::grid(5, vec![('*', vec![6]), ('A', vec![11])]).unwrap();
        let next = successors(&puzzle.board, &puzzle.state);
        assert_eq!(actions(&next), vec!["*+1", "*+2", "A+1", "A+2", "A+3"]);
    }

    #[test]
    fn vertical_steps_are_board_size() {
        let puzzle = puzzle::grid(6, vec![('*', vec![13]), ('V', vec![10, 16])]).unwrap();
        let next = successors(&puzzle.board, &puzzle.state);
        assert_eq!(actions(&next), vec!["*+1", "*+2", "V+6", "V+12"]);
    }
}
