//! First-class invariants for the board.
//!
//! Invariants are logical properties that hold for every board reachable by
//! alternating play from an empty grid. Boards built with
//! [`Board::from_rows`](crate::Board::from_rows) may violate them; the
//! evaluator accepts such boards, so the checks only guard `play`.

mod alternating_turn;
mod mark_balance;
mod play_contract;

pub use alternating_turn::AlternatingTurnInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use play_contract::PlayContract;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, AlternatingTurnInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        assert!(GameInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_plays() {
        let mut board = Board::new();
        for index in [4, 0, 8, 2] {
            let cell = Cell::from_index(index).unwrap();
            assert!(board.play(cell));
            assert!(GameInvariants::check_all(&board).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        use Mark::{Empty as E, First as X};
        let board = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]], Mark::First);

        let violations = GameInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
