//! Tic-tac-toe game logic.
//!
//! Pure board state, win evaluation and click handling with no I/O, shared by
//! the terminal front end and its tests.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Mark`]s plus the mark that moves next
//! - **Rules**: [`evaluate`] classifies any grid as an [`Outcome`]
//! - **Controller**: turns clicks into plays, resets and highlights
//! - **Invariants**: properties `play` preserves, checked in debug builds
//!
//! # Example
//!
//! ```
//! use tictac_core::{Board, Outcome, evaluate};
//!
//! let mut board = Board::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert_eq!(board.play_at(row, col), Ok(true));
//! }
//! assert!(matches!(evaluate(&board), Outcome::Win(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod outcome;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, BoardParseError, GridView};
pub use controller::{ClickEffect, Controller, Selection};
pub use outcome::{Outcome, WinningLine};
pub use rules::{WINNING_LINES, evaluate};
pub use types::{BOARD_SIZE, Cell, CellError, Mark};
