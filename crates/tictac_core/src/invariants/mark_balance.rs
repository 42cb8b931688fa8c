//! Mark balance invariant: First never trails Second and leads by at most one.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: `count(First) - count(Second)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let first = board.count(Mark::First);
        let second = board.count(Mark::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First has as many marks as Second, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards_hold() {
        let board: Board = "XO. ... ...".parse().unwrap();
        assert!(MarkBalanceInvariant::holds(&board));

        let board: Board = "XOX ... ...".parse().unwrap();
        assert!(MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_second_ahead_violates() {
        let board: Board = "OO. X.. ...".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
