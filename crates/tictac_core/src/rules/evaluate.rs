//! Win and stalemate detection.

use super::lines::{DIAGONALS, STRAIGHT_LINES};
use crate::board::GridView;
use crate::outcome::{Outcome, WinningLine};
use crate::types::{Cell, Mark};
use tracing::{instrument, trace};

/// Classifies the grid as a win, a stalemate, or undecided.
///
/// Lines are scanned columns first, then rows, then the two diagonals; the
/// first complete line wins. Diagonals are only examined when the center is
/// occupied, since both pass through it.
///
/// While scanning, any empty cell seen on a line that did not win marks the
/// grid as playable. Without a win, a playable grid is `Undecided` and any
/// other grid is a `Stalemate`. On a 3x3 grid this is the same as "no winner
/// and no empty cell".
///
/// Total over every configuration, including ones alternating play cannot
/// reach, and idempotent.
#[instrument(skip(grid))]
pub fn evaluate<G: GridView + ?Sized>(grid: &G) -> Outcome {
    let mut playable = false;

    for line in &STRAIGHT_LINES {
        if let Some(win) = scan_line(grid, line, line[0], &mut playable) {
            return win;
        }
    }

    if grid.mark_at(Cell::CENTER).is_empty() {
        playable = true;
    } else {
        for line in &DIAGONALS {
            if let Some(win) = scan_line(grid, line, Cell::CENTER, &mut playable) {
                return win;
            }
        }
    }

    let outcome = if playable {
        Outcome::Undecided
    } else {
        Outcome::Stalemate
    };
    trace!(%outcome, "Board evaluated");
    outcome
}

/// Checks one line against its anchor cell, updating `playable`.
fn scan_line<G: GridView + ?Sized>(
    grid: &G,
    line: &[Cell; 3],
    anchor: Cell,
    playable: &mut bool,
) -> Option<Outcome> {
    let mark = grid.mark_at(anchor);
    if mark == Mark::Empty {
        *playable = true;
        return None;
    }

    if line.iter().all(|c| grid.mark_at(*c) == mark) {
        let outcome = Outcome::Win(WinningLine::new(mark, *line));
        trace!(%outcome, "Winning line found");
        return Some(outcome);
    }

    if line.iter().any(|c| grid.mark_at(*c).is_empty()) {
        *playable = true;
    }
    None
}
