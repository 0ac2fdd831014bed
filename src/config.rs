use std::fmt::{self, Display, Formatter};

/// How boards are drawn and read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Cells separated by spaces: `| P * * B . Y @`
    Spaced,
    /// One character per cell: `|P**B.Y@`
    Compact,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Spaced => write!(f, "spaced"),
            Format::Compact => write!(f, "compact"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Print stats to stdout every time the search reaches a new depth.
    pub print_status: bool,
    /// Give up after expanding this many states.
    pub max_states: Option<usize>,
}

impl Config {
    pub fn new(print_status: bool, max_states: Option<usize>) -> Self {
        Config {
            print_status,
            max_states,
        }
    }
}
