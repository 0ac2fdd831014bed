use std::fmt::{self, Debug, Display, Formatter};

// everything fits into u16 for boards up to MAX_SIZE x MAX_SIZE
// but usize saves casts everywhere and states are small anyway
pub type Cell = usize;

pub const MAX_SIZE: usize = 255;

pub const WALL: char = '|';
pub const GOAL: char = '@';
pub const EMPTY: char = '.';
pub const TARGET: char = '*';

/// The direction a car can slide in.
///
/// Never stored - always inferred from the cells the car occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarId(pub char);

impl CarId {
    pub fn target() -> Self {
        CarId(TARGET)
    }
}

impl Display for CarId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for CarId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<char> for CarId {
    fn from(c: char) -> Self {
        CarId(c)
    }
}
