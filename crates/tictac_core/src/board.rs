//! Board state: the 3x3 grid and whose turn it is.

use crate::invariants::{GameInvariants, InvariantSet, PlayContract};
use crate::types::{BOARD_SIZE, Cell, CellError, Mark};
use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Read-only view of a grid, the only thing renderers and the evaluator need.
pub trait GridView {
    /// Mark currently held by `cell`.
    fn mark_at(&self, cell: Cell) -> Mark;

    /// Grid dimensions as `(rows, columns)`.
    fn dimensions(&self) -> (usize, usize) {
        (BOARD_SIZE, BOARD_SIZE)
    }
}

/// 3x3 tic-tac-toe board plus the mark that moves next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Marks indexed `[row][col]`.
    grid: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    /// Mark placed by the next successful play.
    turn: Mark,
}

impl Board {
    /// Creates an empty board with `Mark::First` to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Mark::First,
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No consistency check is made: configurations that alternating play
    /// could never reach are accepted, which the evaluator handles like any
    /// other grid. An `Empty` turn is replaced by `Mark::First`.
    #[instrument]
    pub fn from_rows(grid: [[Mark; BOARD_SIZE]; BOARD_SIZE], turn: Mark) -> Self {
        let turn = if turn.is_empty() { Mark::First } else { turn };
        Self { grid, turn }
    }

    /// Mark at `cell`.
    pub fn mark(&self, cell: Cell) -> Mark {
        self.grid[cell.row()][cell.col()]
    }

    /// Mark that the next successful play will place.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Rows of the grid.
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Plays the current turn's mark at `cell`.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// already occupied. On success exactly one cell is written and the turn
    /// passes to the other mark.
    #[must_use]
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn play(&mut self, cell: Cell) -> bool {
        if !self.mark(cell).is_empty() {
            debug!(%cell, occupant = ?self.mark(cell), "Rejected play on occupied cell");
            return false;
        }

        let before = if cfg!(debug_assertions) && GameInvariants::check_all(&*self).is_ok() {
            Some(self.clone())
        } else {
            None
        };

        self.grid[cell.row()][cell.col()] = self.turn;
        self.turn = self.turn.opponent();
        debug!(%cell, next = ?self.turn, "Play accepted");

        if let Some(before) = before {
            debug_assert!(
                PlayContract::post(&before, self).is_ok(),
                "play broke board invariants: {:?}",
                PlayContract::post(&before, self)
            );
        }

        true
    }

    /// Coordinate form of [`Board::play`].
    ///
    /// # Errors
    ///
    /// Returns `CellError` if `row` or `col` is outside `0..3`.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<bool, CellError> {
        let cell = Cell::new(row, col)?;
        Ok(self.play(cell))
    }

    /// Clears every cell and gives the move back to `Mark::First`.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.turn = Mark::First;
        debug!("Board reset");
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|m| !m.is_empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|c| self.mark(*c).is_empty())
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.grid.iter().flatten().filter(|m| **m == mark).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView for Board {
    fn mark_at(&self, cell: Cell) -> Mark {
        self.mark(cell)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Failure to parse a board string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(#[error(not(source))] char),

    /// The string did not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine marks in row-major order.
    ///
    /// `|`, newlines and tabs are separators; a space counts as an empty
    /// cell only when nine cells would not otherwise be found. The turn is
    /// `Mark::First` when both marks appear equally often, else `Mark::Second`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let with_spaces = collect_marks(s, true)?;
        let marks = if with_spaces.len() == BOARD_SIZE * BOARD_SIZE {
            with_spaces
        } else {
            collect_marks(s, false)?
        };

        if marks.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::WrongCellCount(marks.len()));
        }

        let mut grid = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (cell, mark) in Cell::ALL.iter().zip(marks) {
            grid[cell.row()][cell.col()] = mark;
        }

        let mut board = Board::from_rows(grid, Mark::First);
        if board.count(Mark::First) > board.count(Mark::Second) {
            board.turn = Mark::Second;
        }
        Ok(board)
    }
}

fn collect_marks(s: &str, spaces_are_cells: bool) -> Result<Vec<Mark>, BoardParseError> {
    s.trim_matches(|c: char| c == '\n' || c == '\r')
        .chars()
        .filter(|c| !matches!(c, '|' | '\n' | '\r' | '\t'))
        .filter(|c| spaces_are_cells || *c != ' ')
        .map(|c| Mark::from_symbol(c).ok_or(BoardParseError::InvalidCharacter(c)))
        .collect()
}
