//! Tests for board play and reset.

use tictac_core::invariants::{GameInvariants, InvariantSet};
use tictac_core::{Board, Cell, Mark};

#[test]
fn test_play_always_succeeds_on_empty_and_fails_on_occupied() {
    let mut board = Board::new();
    for (turn, cell) in Cell::ALL.iter().enumerate() {
        let expected = if turn % 2 == 0 { Mark::First } else { Mark::Second };
        assert_eq!(board.turn(), expected);
        assert!(board.play(*cell));
        assert_eq!(board.mark(*cell), expected);
        assert_eq!(board.turn(), expected.opponent());

        let snapshot = board.clone();
        assert!(!board.play(*cell));
        assert_eq!(board, snapshot);
        assert!(GameInvariants::check_all(&board).is_ok());
    }
    assert!(board.is_full());
}

#[test]
fn test_reset_from_arbitrary_configuration() {
    use Mark::{Empty as E, First as X, Second as O};
    for (rows, turn) in [
        ([[X, X, X], [X, X, X], [X, X, X]], Mark::Second),
        ([[O, E, E], [E, O, E], [E, E, O]], Mark::First),
        ([[E, E, E], [E, E, E], [E, E, E]], Mark::Second),
    ] {
        let mut board = Board::from_rows(rows, turn);
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.turn(), Mark::First);
    }
}

#[test]
fn test_play_on_unreachable_board_does_not_panic() {
    use Mark::{Empty as E, First as X};
    let mut board = Board::from_rows([[X, X, X], [X, E, E], [E, E, E]], Mark::First);
    assert!(board.play(Cell::CENTER));
    assert_eq!(board.turn(), Mark::Second);
}
