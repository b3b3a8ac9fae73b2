//! Keyboard handling for the terminal UI.

use crate::games::tictactoe::Position;
use crate::presentation::InputEvent;
use crossterm::event::KeyCode;

/// What a key press asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the game.
    Game(InputEvent),
    /// Move the cursor to a new cell.
    Cursor(Position),
    /// Leave the UI.
    Quit,
    /// Key not bound.
    Ignore,
}

/// Maps a key to an action, given where the cursor currently sits.
pub fn map_key(cursor: Position, key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('r') => KeyAction::Game(InputEvent::ResetRequested),
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Game(InputEvent::CellSelected(cursor.to_index()))
        }
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10).map_or(0, |d| d as usize);
            KeyAction::Game(InputEvent::CellSelected(digit - 1))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(
            map_key(Position::Center, KeyCode::Char('1')),
            KeyAction::Game(InputEvent::CellSelected(0))
        );
        assert_eq!(
            map_key(Position::Center, KeyCode::Char('9')),
            KeyAction::Game(InputEvent::CellSelected(8))
        );
        assert_eq!(map_key(Position::Center, KeyCode::Char('0')), KeyAction::Ignore);
    }

    #[test]
    fn test_enter_selects_cursor() {
        assert_eq!(
            map_key(Position::BottomLeft, KeyCode::Enter),
            KeyAction::Game(InputEvent::CellSelected(6))
        );
        assert_eq!(
            map_key(Position::BottomLeft, KeyCode::Char('r')),
            KeyAction::Game(InputEvent::ResetRequested)
        );
        assert_eq!(map_key(Position::BottomLeft, KeyCode::Esc), KeyAction::Quit);
    }
}
