use crate::data::{Axis, CarId, Cell};
use crate::vec2d::Vec2d;

/// The parts of a puzzle that never change during the search.
///
/// Cells are numbered row by row: `row = cell / size`, `col = cell % size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    walls: Vec2d<bool>,
    goal: Cell,
    target: CarId,
}

impl Board {
    /// Expects cells to be validated already (see `Puzzle::new`).
    pub(crate) fn new(size: usize, walls: &[Cell], goal: Cell, target: CarId) -> Self {
        let mut grid = Vec2d::new(size, false);
        for &wall in walls {
            grid[wall] = true;
        }
        Board {
            walls: grid,
            goal,
            target,
        }
    }

    /// All cells on the edge of a `size` x `size` board in increasing order.
    pub fn border(size: usize) -> Vec<Cell> {
        (0..size * size)
            .filter(|&cell| {
                let (r, c) = (cell / size, cell % size);
                r == 0 || c == 0 || r == size - 1 || c == size - 1
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.walls.size()
    }

    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn target(&self) -> CarId {
        self.target
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls[cell]
    }

    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).filter(move |&cell| self.walls[cell])
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count()
    }

    pub fn row(&self, cell: Cell) -> usize {
        cell / self.size()
    }

    pub fn col(&self, cell: Cell) -> usize {
        cell % self.size()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        row * self.size() + col
    }

    /// Distance between two neighboring cells along the axis.
    pub fn stride(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => 1,
            Axis::Vertical => self.size(),
        }
    }

    /// The neighbor of `cell` along `axis`, `None` at the edge of the board.
    ///
    /// Horizontal steps never wrap around to another row.
    pub fn step(&self, cell: Cell, axis: Axis, forward: bool) -> Option<Cell> {
        let last = self.size() - 1;
        match (axis, forward) {
            (Axis::Horizontal, true) if self.col(cell) < last => Some(cell + 1),
            (Axis::Horizontal, false) if self.col(cell) > 0 => Some(cell - 1),
            (Axis::Vertical, true) if self.row(cell) < last => Some(cell + self.size()),
            (Axis::Vertical, false) if self.row(cell) > 0 => Some(cell - self.size()),
            _ => None,
        }
    }

    pub(crate) fn wall_grid(&self) -> &Vec2d<bool> {
        &self.walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board8() -> Board {
        let mut walls = Board::border(8);
        walls.retain(|&c| c != 31);
        Board::new(8, &walls, 31, CarId::target())
    }

    #[test]
    fn border_of_8() {
        let border = Board::border(8);
        assert_eq!(border.len(), 28);
        assert_eq!(&border[..10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 15]);
        assert!(border.contains(&31));
        assert_eq!(border[border.len() - 1], 63);
    }

    #[test]
    fn coordinates() {
        let board = board8();
        assert_eq!(board.size(), 8);
        assert_eq!(board.cell_count(), 64);
        assert_eq!(board.row(31), 3);
        assert_eq!(board.col(31), 7);
        assert_eq!(board.cell_at(3, 7), 31);
        assert!(board.is_wall(0));
        assert!(!board.is_wall(31));
        assert!(!board.is_wall(9));
        assert_eq!(board.walls().count(), 27);
    }

    #[test]
    fn steps_stay_on_board() {
        let board = board8();
        assert_eq!(board.step(30, Axis::Horizontal, true), Some(31));
        assert_eq!(board.step(31, Axis::Horizontal, true), None);
        assert_eq!(board.step(32, Axis::Horizontal, false), None);
        assert_eq!(board.step(9, Axis::Vertical, false), Some(1));
        assert_eq!(board.step(1, Axis::Vertical, false), None);
        assert_eq!(board.step(62, Axis::Vertical, true), None);
        assert_eq!(board.step(54, Axis::Vertical, true), Some(62));
        assert_eq!(board.stride(Axis::Vertical), 8);
        assert_eq!(board.stride(Axis::Horizontal), 1);
    }
}
