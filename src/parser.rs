use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::data::{CarId, Cell, EMPTY, GOAL, WALL};
use crate::puzzle::{Entity, Puzzle, PuzzleErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    /// Spaced format only - more than one character between spaces.
    Token(usize, usize),
    /// Row doesn't have as many cells as there are rows.
    RowLength(usize),
    Puzzle(PuzzleErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty puzzle"),
            ParserErr::Token(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::RowLength(r) => write!(f, "Puzzle is not square - wrong length of row {}", r),
            ParserErr::Puzzle(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<PuzzleErr> for ParserErr {
    fn from(err: PuzzleErr) -> Self {
        ParserErr::Puzzle(err)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Detects the format - any space inside a row means `Format::Spaced`.
pub(crate) fn parse(puzzle: &str) -> Result<Puzzle, ParserErr> {
    let format = if trim(puzzle).lines().any(|line| line.trim_end().contains(' ')) {
        Format::Spaced
    } else {
        Format::Compact
    };
    parse_format(puzzle, format)
}

pub(crate) fn parse_format(puzzle: &str, format: Format) -> Result<Puzzle, ParserErr> {
    let puzzle = trim(puzzle);
    if puzzle.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut rows = Vec::new();
    for (r, line) in puzzle.lines().enumerate() {
        let line = line.trim_end();
        let row = match format {
            Format::Spaced => {
                let mut row = Vec::new();
                for (c, token) in line.split_whitespace().enumerate() {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => row.push(ch),
                        _ => return Err(ParserErr::Token(r, c)),
                    }
                }
                row
            }
            Format::Compact => line.chars().collect(),
        };
        rows.push(row);
    }

    let size = rows.len();
    let mut walls = Vec::new();
    let mut goals = Vec::new();
    let mut cars: BTreeMap<char, Vec<Cell>> = BTreeMap::new();
    for (r, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(ParserErr::RowLength(r));
        }
        for (c, &ch) in row.iter().enumerate() {
            let cell = r * size + c;
            match ch {
                EMPTY => {}
                WALL => walls.push(cell),
                GOAL => goals.push(cell),
                _ => cars.entry(ch).or_insert_with(Vec::new).push(cell),
            }
        }
    }

    let mut entries = Vec::with_capacity(cars.len() + 2);
    if !walls.is_empty() {
        entries.push((Entity::Wall, walls));
    }
    if !goals.is_empty() {
        entries.push((Entity::Goal, goals));
    }
    entries.extend(
        cars.into_iter()
            .map(|(ch, cells)| (Entity::Car(CarId(ch)), cells)),
    );

    Ok(Puzzle::new(size, CarId::target(), entries)?)
}

// trim so we can specify puzzles using raw strings more easily
fn trim(puzzle: &str) -> &str {
    puzzle.trim_matches('\n').trim_end()
}
