//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Occupant of a cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// The mark that moves first (X).
    First,
    /// The mark that moves second (O).
    Second,
}

impl Mark {
    /// Returns the mark that plays after this one.
    ///
    /// `Empty` has no opponent and maps to itself.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Returns true for `Mark::Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }

    /// Parses a board character. Accepts `X`/`O` in either case and
    /// `.`, `-`, `_` or a space for an empty cell.
    #[instrument]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::First),
            'O' | 'o' => Some(Mark::Second),
            '.' | '-' | '_' | ' ' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A coordinate was outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell ({}, {}) is outside the 3x3 board", row, col)]
pub struct CellError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// A position on the board. Both coordinates are always in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Cell = Cell::at(1, 1);

    // Only called with literals known to be in range.
    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a cell, rejecting coordinates outside the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CellError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CellError { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Row index (0 is the top).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 is the left).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Creates a cell from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Cell::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::First.opponent(), Mark::Second);
        assert_eq!(Mark::Second.opponent(), Mark::First);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }

    #[test]
    fn test_cell_bounds() {
        assert!(Cell::new(2, 2).is_ok());
        assert_eq!(Cell::new(3, 0), Err(CellError { row: 3, col: 0 }));
        assert_eq!(Cell::new(0, 7), Err(CellError { row: 0, col: 7 }));
    }

    #[test]
    fn test_cell_index_roundtrip() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_symbol_parsing() {
        assert_eq!(Mark::from_symbol('x'), Some(Mark::First));
        assert_eq!(Mark::from_symbol('O'), Some(Mark::Second));
        assert_eq!(Mark::from_symbol('_'), Some(Mark::Empty));
        assert_eq!(Mark::from_symbol('7'), None);
    }
}
