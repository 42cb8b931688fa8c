//! Postcondition of a successful play.

use super::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{Board, Cell};

/// Contract for `Board::play`.
///
/// Holds when exactly one cell went from Empty to the previous turn's mark,
/// the turn passed to the opponent, and the board invariants still hold.
pub struct PlayContract;

impl PlayContract {
    /// Checks the transition from `before` to `after`.
    pub fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed: Vec<Cell> = Cell::ALL
            .iter()
            .copied()
            .filter(|c| before.mark(*c) != after.mark(*c))
            .collect();

        match changed.as_slice() {
            [cell] => {
                if !before.mark(*cell).is_empty() || after.mark(*cell) != before.turn() {
                    violations.push(InvariantViolation::new(
                        "Play writes the mover's mark onto an empty cell",
                    ));
                }
            }
            _ => violations.push(InvariantViolation::new(
                "Play writes exactly one cell",
            )),
        }

        if after.turn() != before.turn().opponent() {
            violations.push(InvariantViolation::new("Play passes the turn"));
        }

        if let Err(mut broken) = GameInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_play_satisfies_contract() {
        let before = Board::new();
        let mut after = before.clone();
        assert!(after.play(Cell::CENTER));
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_two_plays_violate_contract() {
        let before = Board::new();
        let mut after = before.clone();
        assert!(after.play(Cell::CENTER));
        assert!(after.play(Cell::from_index(0).unwrap()));

        let violations = PlayContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == "Play writes exactly one cell")
        );
    }

    #[test]
    fn test_no_change_violates_contract() {
        let board = Board::new();
        assert!(PlayContract::post(&board, &board).is_err());
    }
}
