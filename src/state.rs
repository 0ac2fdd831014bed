use std::fmt::{self, Debug, Formatter};

use crate::data::{Axis, CarId, Cell};
use crate::moves::Action;

/// Cells occupied by one car in increasing order.
///
/// Always non-empty and contiguous along one axis.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(Vec<Cell>);

impl Position {
    /// Sorts the cells and returns `None` unless they form a single
    /// horizontal or vertical run on a `size` x `size` board.
    pub fn checked(mut cells: Vec<Cell>, size: usize) -> Option<Self> {
        cells.sort();
        let first = *cells.first()?;
        let last = *cells.last()?;

        let horizontal = last - first < size;
        let stride = if horizontal { 1 } else { size };
        let contiguous = cells.windows(2).all(|pair| pair[1] - pair[0] == stride);
        // 15, 16 differ by one but are on different rows
        let one_row = !horizontal || first / size == last / size;

        if contiguous && one_row {
            Some(Position(cells))
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn first(&self) -> Cell {
        self.0[0]
    }

    pub fn last(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Single cell cars count as horizontal.
    pub fn axis(&self, size: usize) -> Axis {
        if self.last() - self.first() < size {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub(crate) fn shifted(&self, delta: isize) -> Position {
        Position(
            self.0
                .iter()
                .map(|&cell| (cell as isize + delta) as Cell)
                .collect(),
        )
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Car {
    pub id: CarId,
    pub position: Position,
}

impl Car {
    pub fn new(id: CarId, position: Position) -> Self {
        Car { id, position }
    }
}

/// Positions of all cars, sorted by id so that equal arrangements compare
/// and hash equal. Walls and the goal live in `Board` because they never move.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    cars: Vec<Car>,
}

impl State {
    pub(crate) fn new(mut cars: Vec<Car>) -> Self {
        cars.sort();
        State { cars }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars
            .binary_search_by_key(&id, |car| car.id)
            .ok()
            .map(|index| &self.cars[index])
    }

    pub fn position(&self, id: CarId) -> Option<&Position> {
        self.car(id).map(|car| &car.position)
    }

    /// A new state where only the car at `index` moved.
    pub(crate) fn with_position(&self, index: usize, position: Position) -> State {
        let mut cars = self.cars.clone();
        cars[index].position = position;
        State { cars }
    }

    /// Shifts the car named by the action, `None` if there is no such car.
    ///
    /// Doesn't check collisions - this is for replaying actions
    /// that were produced by the solver.
    pub fn apply(&self, action: &Action) -> Option<State> {
        let index = self
            .cars
            .binary_search_by_key(&action.car, |car| car.id)
            .ok()?;
        let position = self.cars[index].position.shifted(action.displacement);
        Some(self.with_position(index, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_sorted_and_contiguous() {
        let p = Position::checked(vec![27, 26], 8).unwrap();
        assert_eq!(p.cells(), &[26, 27]);
        assert_eq!(p.axis(8), Axis::Horizontal);

        let p = Position::checked(vec![14, 22, 30], 8).unwrap();
        assert_eq!(p.axis(8), Axis::Vertical);
        assert_eq!((p.first(), p.last(), p.len()), (14, 30, 3));

        let single = Position::checked(vec![9], 8).unwrap();
        assert_eq!(single.axis(8), Axis::Horizontal);
    }

    #[test]
    fn malformed_positions() {
        assert!(Position::checked(vec![], 8).is_none());
        // gap
        assert!(Position::checked(vec![9, 11], 8).is_none());
        // wraps to the next row
        assert!(Position::checked(vec![15, 16], 8).is_none());
        // L shape
        assert!(Position::checked(vec![9, 10, 18], 8).is_none());
        // duplicate cell
        assert!(Position::checked(vec![9, 9], 8).is_none());
    }

    #[test]
    fn lookup_and_apply() {
        let a = Car::new(CarId('A'), Position::checked(vec![45, 46], 8).unwrap());
        let b = Car::new(CarId('B'), Position::checked(vec![20, 28, 36], 8).unwrap());
        let state = State::new(vec![b, a]);
        assert_eq!(state.cars()[0].id, CarId('A'));
        assert!(state.car(CarId('C')).is_none());

        let moved = state.apply(&Action::new('B', 16)).unwrap();
        assert_eq!(moved.position(CarId('B')).unwrap().cells(), &[36, 44, 52]);
        assert_eq!(moved.position(CarId('A')), state.position(CarId('A')));
        assert_ne!(moved, state);

        let back = moved.apply(&Action::new('B', -16)).unwrap();
        assert_eq!(back, state);

        assert!(state.apply(&Action::new('X', 1)).is_none());
    }
}
