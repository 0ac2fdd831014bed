use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Cell;

/// Square grid stored row by row so that a `Cell` is directly the index.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn new(size: usize, default: T) -> Self {
        Vec2d {
            data: vec![default; size * size],
            size,
        }
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d::new(self.size, default)
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.size)
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Cell> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<Cell> for Vec2d<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_by_cell() {
        let mut grid = Vec2d::new(3, false);
        grid[0] = true;
        grid[4] = true;
        grid[8] = true;
        assert_eq!(grid.to_string(), "100\n010\n001\n");

        let scratch = grid.scratchpad(7u8);
        assert_eq!(scratch.size(), 3);
        assert_eq!(scratch[5], 7);
    }
}
