//! Classification of a grid configuration.

use crate::types::{Cell, Mark};
use serde::Serialize;

/// Three cells sharing one mark along a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    mark: Mark,
    cells: [Cell; 3],
}

impl WinningLine {
    pub(crate) fn new(mark: Mark, cells: [Cell; 3]) -> Self {
        Self { mark, cells }
    }

    /// The mark that completed the line. Never `Mark::Empty`.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The three cells of the line, in the order the line is listed in
    /// [`WINNING_LINES`](crate::WINNING_LINES).
    pub fn cells(&self) -> [Cell; 3] {
        self.cells
    }

    /// Checks if `cell` is part of the line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Result of evaluating a board. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// No completed line and play can continue.
    Undecided,
    /// A line is complete.
    Win(WinningLine),
    /// No completed line and no empty cell left.
    Stalemate,
}

impl Outcome {
    /// True for `Win` and `Stalemate`.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(line) => Some(line.mark()),
            _ => None,
        }
    }

    /// The winning triple, if any.
    pub fn winning_cells(&self) -> Option<[Cell; 3]> {
        match self {
            Outcome::Win(line) => Some(line.cells()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Win(line) => {
                let [a, b, c] = line.cells();
                write!(f, "{} wins on {} {} {}", line.mark(), a, b, c)
            }
            Outcome::Stalemate => write!(f, "Stalemate"),
        }
    }
}
