//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`GridView`](crate::GridView). Rules are kept apart
//! from board storage so renderers and tests can evaluate any grid.

pub mod evaluate;
pub mod lines;

pub use evaluate::evaluate;
pub use lines::{DIAGONALS, STRAIGHT_LINES, WINNING_LINES};
