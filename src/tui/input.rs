//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictac_core::{BOARD_SIZE, Cell};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the keyboard cursor.
    Cursor(KeyCode),
    /// Click the cell under the cursor.
    Click,
    /// Start a new game.
    Restart,
    /// Use larger tiles.
    ScaleUp,
    /// Use smaller tiles.
    ScaleDown,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action. Releases and repeats of non-cursor keys
/// are ignored.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    let is_press = key.kind == KeyEventKind::Press;
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
            if key.kind != KeyEventKind::Release =>
        {
            Some(KeyAction::Cursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') if is_press => Some(KeyAction::Click),
        KeyCode::Char('r') if is_press => Some(KeyAction::Restart),
        KeyCode::Char('+') | KeyCode::Char('=') if is_press => Some(KeyAction::ScaleUp),
        KeyCode::Char('-') if is_press => Some(KeyAction::ScaleDown),
        KeyCode::Char('q') | KeyCode::Esc if is_press => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Terminal position of a left-button press, if `event` is one.
pub fn left_click(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;

    let (row, col) = match key {
        KeyCode::Right => (row, (col + 1).min(last)),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Up => (row.saturating_sub(1), col),
        _ => (row, col),
    };

    Cell::new(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Right), Cell::new(1, 2).unwrap());
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Up), Cell::new(0, 1).unwrap());
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Char('x')), Cell::CENTER);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let corner = Cell::new(0, 0).unwrap();
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);

        let corner = Cell::new(2, 2).unwrap();
        assert_eq!(move_cursor(corner, KeyCode::Right), corner);
        assert_eq!(move_cursor(corner, KeyCode::Down), corner);
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(key_action(press(KeyCode::Enter)), Some(KeyAction::Click));
        assert_eq!(key_action(press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(key_action(press(KeyCode::Char('+'))), Some(KeyAction::ScaleUp));
        assert_eq!(key_action(press(KeyCode::Char('z'))), None);

        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_action(release), None);
    }

    #[test]
    fn test_only_left_press_clicks() {
        let mut event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(left_click(event), Some((10, 4)));

        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(left_click(event), None);
        event.kind = MouseEventKind::Moved;
        assert_eq!(left_click(event), None);
    }
}
