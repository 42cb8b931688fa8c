//! Application state and logic.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tictac_core::{Cell, ClickEffect, Controller, Mark, Outcome};
use tracing::{debug, info, instrument};

use super::geometry::{BoardGeometry, TileScale, screen_layout};
use super::input::{KeyAction, key_action, left_click, move_cursor};

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    cursor: Cell,
    scale: TileScale,
    mouse: bool,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(scale: TileScale, mouse: bool) -> Self {
        let controller = Controller::new();
        let status_message = turn_message(controller.board().turn(), mouse);
        Self {
            controller,
            cursor: Cell::CENTER,
            scale,
            mouse,
            status_message,
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Requested tile scale.
    pub fn scale(&self) -> TileScale {
        self.scale
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Grid placement for a terminal of size `area`.
    pub fn geometry(&self, area: Rect) -> BoardGeometry {
        BoardGeometry::fit(screen_layout(area).board, self.scale)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = key_action(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::Cursor(code) => self.cursor = move_cursor(self.cursor, code),
            KeyAction::Click => self.click(Some(self.cursor)),
            KeyAction::Restart => self.restart(),
            KeyAction::ScaleUp => self.scale = self.scale.larger(),
            KeyAction::ScaleDown => self.scale = self.scale.smaller(),
            KeyAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse event in a terminal of size `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if !self.mouse {
            return;
        }
        let Some((column, row)) = left_click(event) else {
            return;
        };

        let target = self.geometry(area).cell_at(column, row);
        if let Some(cell) = target {
            self.cursor = cell;
        }
        self.click(target);
    }

    /// Clicks `target` and updates the status line.
    #[instrument(skip(self))]
    pub fn click(&mut self, target: Option<Cell>) {
        let effect = self.controller.click(target);
        debug!(?effect, "Click handled");

        let turn = self.controller.board().turn();
        match effect {
            ClickEffect::Ignored => {}
            ClickEffect::Reset => {
                self.status_message = format!("New game. {}", turn_message(turn, self.mouse));
            }
            ClickEffect::Rejected { cell } => {
                self.status_message =
                    format!("{} is taken. {}", cell, turn_message(turn, self.mouse));
            }
            ClickEffect::Played { outcome, .. } => {
                self.status_message = outcome_message(outcome, turn, self.mouse);
            }
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.controller.restart();
        let turn = self.controller.board().turn();
        self.status_message = format!("Game restarted. {}", turn_message(turn, self.mouse));
    }
}

fn turn_message(turn: Mark, mouse: bool) -> String {
    let how = if mouse { "click a tile" } else { "Enter to play" };
    format!("{} to move ({}, 'q' to quit)", turn, how)
}

fn outcome_message(outcome: Outcome, turn: Mark, mouse: bool) -> String {
    let again = if mouse { "Click" } else { "Press Enter" };
    match outcome {
        Outcome::Undecided => turn_message(turn, mouse),
        Outcome::Win(line) => format!("{} wins! {} to play again.", line.mark(), again),
        Outcome::Stalemate => format!("Stalemate! {} to play again.", again),
    }
}
