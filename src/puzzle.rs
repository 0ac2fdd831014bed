use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::board::Board;
use crate::config::Format;
use crate::data::{CarId, Cell, GOAL, MAX_SIZE, WALL};
use crate::map_formatter::MapFormatter;
use crate::state::{Car, Position, State};
use crate::vec2d::Vec2d;

/// What an entry of a puzzle description stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Wall,
    Goal,
    Car(CarId),
}

impl From<char> for Entity {
    fn from(c: char) -> Self {
        match c {
            WALL => Entity::Wall,
            GOAL => Entity::Goal,
            _ => Entity::Car(CarId(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleErr {
    BadSize(usize),
    NoWall,
    MultipleWalls,
    NoGoal,
    MultipleGoals,
    GoalNotSingleCell,
    GoalOnWall(Cell),
    EmptyPosition(CarId),
    DuplicateCar(CarId),
    OutOfBounds(Cell),
    NotContiguous(CarId),
    Overlap(Cell),
    NoTarget(CarId),
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::BadSize(size) => {
                write!(f, "Board size {} not in range 3..={}", size, MAX_SIZE)
            }
            PuzzleErr::NoWall => write!(f, "No wall"),
            PuzzleErr::MultipleWalls => write!(f, "More than one wall entry"),
            PuzzleErr::NoGoal => write!(f, "No goal"),
            PuzzleErr::MultipleGoals => write!(f, "More than one goal entry"),
            PuzzleErr::GoalNotSingleCell => write!(f, "Goal must be exactly one cell"),
            PuzzleErr::GoalOnWall(cell) => write!(f, "Goal at {} is inside the wall", cell),
            PuzzleErr::EmptyPosition(id) => write!(f, "Car {} occupies no cells", id),
            PuzzleErr::DuplicateCar(id) => write!(f, "Car {} listed more than once", id),
            PuzzleErr::OutOfBounds(cell) => write!(f, "Cell {} is outside the board", cell),
            PuzzleErr::NotContiguous(id) => write!(
                f,
                "Car {} is not a single horizontal or vertical run of cells",
                id
            ),
            PuzzleErr::Overlap(cell) => write!(f, "Cell {} is occupied more than once", cell),
            PuzzleErr::NoTarget(id) => write!(f, "Target car {} is missing", id),
        }
    }
}

impl Error for PuzzleErr {}

/// A board together with the starting arrangement of cars.
#[derive(Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub board: Board,
    pub state: State,
}

impl Puzzle {
    /// Builds and validates a puzzle from an unordered description.
    ///
    /// There has to be exactly one wall entry, exactly one single-cell goal entry
    /// and a car named `target`. Cars may not overlap each other or the wall,
    /// the goal cell is not considered occupied.
    pub fn new<I>(size: usize, target: CarId, entries: I) -> Result<Self, PuzzleErr>
    where
        I: IntoIterator<Item = (Entity, Vec<Cell>)>,
    {
        if size < 3 || size > MAX_SIZE {
            return Err(PuzzleErr::BadSize(size));
        }
        let in_bounds = |cell: Cell| {
            if cell < size * size {
                Ok(cell)
            } else {
                Err(PuzzleErr::OutOfBounds(cell))
            }
        };

        let mut walls = None;
        let mut goal = None;
        let mut raw_cars = Vec::new();
        let mut ids = FnvHashSet::default();
        for (entity, cells) in entries {
            match entity {
                Entity::Wall => {
                    if walls.replace(cells).is_some() {
                        return Err(PuzzleErr::MultipleWalls);
                    }
                }
                Entity::Goal => {
                    if goal.replace(cells).is_some() {
                        return Err(PuzzleErr::MultipleGoals);
                    }
                }
                Entity::Car(id) => {
                    if !ids.insert(id) {
                        return Err(PuzzleErr::DuplicateCar(id));
                    }
                    raw_cars.push((id, cells));
                }
            }
        }

        let walls = walls.ok_or(PuzzleErr::NoWall)?;
        let goal = goal.ok_or(PuzzleErr::NoGoal)?;
        if goal.len() != 1 {
            return Err(PuzzleErr::GoalNotSingleCell);
        }
        let goal = in_bounds(goal[0])?;

        let mut occupied = Vec2d::new(size, false);
        for &wall in &walls {
            occupied[in_bounds(wall)?] = true;
        }
        if occupied[goal] {
            return Err(PuzzleErr::GoalOnWall(goal));
        }

        let mut cars = Vec::with_capacity(raw_cars.len());
        for (id, cells) in raw_cars {
            if cells.is_empty() {
                return Err(PuzzleErr::EmptyPosition(id));
            }
            for &cell in &cells {
                in_bounds(cell)?;
            }
            let position = Position::checked(cells, size).ok_or(PuzzleErr::NotContiguous(id))?;
            for &cell in position.cells() {
                if occupied[cell] {
                    return Err(PuzzleErr::Overlap(cell));
                }
                occupied[cell] = true;
            }
            cars.push(Car::new(id, position));
        }

        if !ids.contains(&target) {
            return Err(PuzzleErr::NoTarget(target));
        }

        Ok(Puzzle {
            board: Board::new(size, &walls, goal, target),
            state: State::new(cars),
        })
    }

    /// Same as `new` but entities are given by their characters,
    /// `|` is the wall, `@` the goal and `*` the target car.
    pub fn from_chars<I>(size: usize, entries: I) -> Result<Self, PuzzleErr>
    where
        I: IntoIterator<Item = (char, Vec<Cell>)>,
    {
        Self::new(
            size,
            CarId::target(),
            entries.into_iter().map(|(c, cells)| (Entity::from(c), cells)),
        )
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.board, &self.state, format)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Spaced))
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// `n` cells starting at `start`, `incr` apart (1 for horizontal, board size for vertical).
pub fn locs(start: Cell, n: usize, incr: usize) -> Vec<Cell> {
    (0..n).map(|i| start + i * incr).collect()
}

/// The goal cell `grid` uses: the middle of the right border.
pub fn default_goal(size: usize) -> Cell {
    (size - 1) / 2 * size + size - 1
}

/// A `size` x `size` board with walls all around except for the goal
/// in the middle of the right side.
pub fn grid<I>(size: usize, cars: I) -> Result<Puzzle, PuzzleErr>
where
    I: IntoIterator<Item = (char, Vec<Cell>)>,
{
    if size < 3 || size > MAX_SIZE {
        return Err(PuzzleErr::BadSize(size));
    }
    let goal = default_goal(size);
    let mut walls = Board::border(size);
    walls.retain(|&cell| cell != goal);

    let cars = cars
        .into_iter()
        .map(|(c, cells)| (Entity::Car(CarId(c)), cells));
    let fixed = vec![(Entity::Wall, walls), (Entity::Goal, vec![goal])];
    Puzzle::new(size, CarId::target(), fixed.into_iter().chain(cars))
}

pub const BUILTIN_COUNT: usize = 3;

/// Reference puzzles, numbered from 1. The first one takes 4 actions,
/// the other two take 7.
pub fn builtin(number: usize) -> Option<Puzzle> {
    const N: usize = 8;
    let cars = match number {
        1 => vec![
            ('*', locs(26, 2, 1)),
            ('G', locs(9, 2, 1)),
            ('Y', locs(14, 3, N)),
            ('P', locs(17, 3, N)),
            ('O', locs(41, 2, N)),
            ('B', locs(20, 3, N)),
            ('A', locs(45, 2, 1)),
        ],
        2 => vec![
            ('*', locs(26, 2, 1)),
            ('B', locs(20, 3, N)),
            ('P', locs(33, 3, 1)),
            ('O', locs(41, 2, N)),
            ('Y', locs(51, 3, 1)),
        ],
        3 => vec![
            ('*', locs(25, 2, 1)),
            ('B', locs(19, 3, N)),
            ('P', locs(36, 3, 1)),
            ('O', locs(45, 2, N)),
            ('Y', locs(49, 3, 1)),
        ],
        _ => return None,
    };
    grid(N, cars).ok()
}
