//! Click-driven game flow, independent of any rendering backend.
//!
//! The front end resolves a pointer position to an optional [`Cell`] and
//! hands it to [`Controller::click`]; the controller plays, evaluates and
//! keeps the set of highlighted cells the front end should draw.

use crate::board::Board;
use crate::outcome::Outcome;
use crate::rules::evaluate;
use crate::types::{Cell, Mark};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Cells the front end should draw highlighted.
pub type Selection = BTreeSet<Cell>;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEffect {
    /// The pointer was outside the grid.
    Ignored,
    /// The game was already decided; the board was cleared.
    Reset,
    /// The clicked cell was occupied; nothing was played.
    Rejected {
        /// The occupied cell.
        cell: Cell,
    },
    /// A mark was placed.
    Played {
        /// Where the mark went.
        cell: Cell,
        /// The mark placed.
        mark: Mark,
        /// Outcome after the play.
        outcome: Outcome,
    },
}

/// Owns the board and the highlight state between clicks.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    board: Board,
    last_click: Option<Cell>,
    selection: Selection,
}

impl Controller {
    /// Creates a controller around a fresh board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells currently highlighted.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Handles a click on `target`, or outside the grid when `None`.
    ///
    /// A click while the game is decided starts a new game instead of
    /// playing. Otherwise the previous click's highlight is dropped and the
    /// clicked cell is played; on success it becomes highlighted, or the
    /// winning triple does if the play completed a line.
    #[instrument(skip(self), fields(turn = ?self.board.turn()))]
    pub fn click(&mut self, target: Option<Cell>) -> ClickEffect {
        let Some(cell) = target else {
            debug!("Click outside the grid ignored");
            return ClickEffect::Ignored;
        };

        if self.outcome().is_decided() {
            self.restart();
            return ClickEffect::Reset;
        }

        if let Some(previous) = self.last_click.take() {
            self.selection.remove(&previous);
        }

        let mark = self.board.turn();
        if !self.board.play(cell) {
            debug!(%cell, "Cell already taken");
            return ClickEffect::Rejected { cell };
        }

        self.selection.insert(cell);
        self.last_click = Some(cell);

        let outcome = self.outcome();
        match outcome {
            Outcome::Win(line) => {
                info!(winner = %line.mark(), "Game won");
                self.selection = line.cells().into_iter().collect();
            }
            Outcome::Stalemate => {
                info!("Stalemate");
                self.selection.clear();
            }
            Outcome::Undecided => {}
        }

        ClickEffect::Played {
            cell,
            mark,
            outcome,
        }
    }

    /// Clears the board and every highlight.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Starting new game");
        self.board.reset();
        self.selection.clear();
        self.last_click = None;
    }
}
