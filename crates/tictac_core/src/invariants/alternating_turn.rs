//! Alternating turn invariant: the turn follows from the marks on the board.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: it is First's turn exactly when both marks appear equally often.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let expected = if board.count(Mark::First) == board.count(Mark::Second) {
            Mark::First
        } else {
            Mark::Second
        };
        board.turn() == expected
    }

    fn description() -> &'static str {
        "Turn alternates First, Second, First, ..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_board_holds() {
        assert!(AlternatingTurnInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut board = Board::new();
        for index in [0, 3, 1, 4] {
            assert!(board.play(Cell::from_index(index).unwrap()));
            assert!(AlternatingTurnInvariant::holds(&board));
        }
        assert_eq!(board.turn(), Mark::First);
    }

    #[test]
    fn test_wrong_turn_violates() {
        use Mark::{Empty as E, First as X};
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]], Mark::First);
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
