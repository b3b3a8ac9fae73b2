//! Application state and logic.

use super::input::{KeyAction, map_key};
use crate::games::tictactoe::Position;
use crate::presentation::{DisplayState, GameController};
use crossterm::event::KeyCode;
use tracing::debug;

/// Main application state.
pub struct App {
    controller: GameController<DisplayState>,
    cursor: Position,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application and draws the opening board.
    pub fn new(show_cell_numbers: bool) -> Self {
        let mut controller = GameController::new(DisplayState::new());
        controller.start();
        Self {
            controller,
            cursor: Position::Center,
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// Gets what the display should show.
    pub fn display(&self) -> &DisplayState {
        self.controller.presenter()
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = map_key(self.cursor, key);
        debug!(?key, ?action, "Handling key");

        match action {
            KeyAction::Game(event) => {
                self.controller.handle(event);
            }
            KeyAction::Cursor(position) => self.cursor = position,
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_keys_drive_game() {
        let mut app = App::new(true);
        assert_eq!(app.display().message(), "Player X's Turn");

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.display().cell(Position::Center), Square::Occupied(Player::X));
        assert_eq!(app.display().message(), "Player O's Turn");

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.display().cell(Position::Center), Square::Empty);
        assert_eq!(app.display().message(), "Player X's Turn");
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
