//! The eight winning lines, in evaluation order.

use crate::types::Cell;

const fn c(col: usize) -> [Cell; 3] {
    [Cell::ALL[col], Cell::ALL[3 + col], Cell::ALL[6 + col]]
}

const fn r(row: usize) -> [Cell; 3] {
    [Cell::ALL[row * 3], Cell::ALL[row * 3 + 1], Cell::ALL[row * 3 + 2]]
}

/// Columns left to right, then rows top to bottom. Cells run top to bottom
/// within a column and left to right within a row.
pub const STRAIGHT_LINES: [[Cell; 3]; 6] = [c(0), c(1), c(2), r(0), r(1), r(2)];

/// Anti-diagonal (top-right to bottom-left) first, then the main diagonal.
pub const DIAGONALS: [[Cell; 3]; 2] = [
    [Cell::ALL[2], Cell::ALL[4], Cell::ALL[6]],
    [Cell::ALL[0], Cell::ALL[4], Cell::ALL[8]],
];

/// All eight lines in the order the evaluator scans them.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    STRAIGHT_LINES[0],
    STRAIGHT_LINES[1],
    STRAIGHT_LINES[2],
    STRAIGHT_LINES[3],
    STRAIGHT_LINES[4],
    STRAIGHT_LINES[5],
    DIAGONALS[0],
    DIAGONALS[1],
];
