//! Bridge between a display surface and the game engine.
//!
//! The display only forwards raw input ([`InputEvent`]) and draws what it
//! is told through [`Presenter`]. All game logic stays in [`GameEngine`].

use crate::games::tictactoe::{
    Board, GameEngine, GameStatus, MoveResult, Player, Position, Square,
};
use tracing::{debug, instrument};

/// Raw input coming from the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A cell (0-8) was selected.
    CellSelected(usize),
    /// A new game was requested.
    ResetRequested,
}

/// Display surface driven by [`GameController`].
pub trait Presenter {
    /// Draws the contents of a single cell.
    fn render_cell(&mut self, position: Position, square: Square);

    /// Replaces the turn or result message.
    fn render_message(&mut self, message: &str);

    /// Highlights the three cells of a winning line.
    fn highlight(&mut self, line: &[Position; 3]);

    /// Clears every cell and any highlight.
    fn clear_board(&mut self);
}

/// Formats the message shown for a given turn and status.
pub fn status_message(current_player: Player, status: &GameStatus) -> String {
    match status {
        GameStatus::InProgress => format!("Player {}'s Turn", current_player),
        GameStatus::Won(winner) => format!("Player {} Wins!", winner),
        GameStatus::Draw => "It's a Draw!".to_string(),
    }
}

/// Mirror of what the display currently shows.
///
/// Built up purely from [`Presenter`] calls, so it can be compared against
/// the engine to confirm the display stayed in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    cells: [Square; 9],
    highlight: Option<[Position; 3]>,
    message: String,
}

impl DisplayState {
    /// Creates an empty display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns what is drawn in a cell.
    pub fn cell(&self, position: Position) -> Square {
        self.cells[position.to_index()]
    }

    /// Returns true if the cell is part of the highlighted line.
    pub fn is_highlighted(&self, position: Position) -> bool {
        self.highlight.is_some_and(|line| line.contains(&position))
    }

    /// Returns the highlighted line, if any.
    pub fn highlight_line(&self) -> Option<[Position; 3]> {
        self.highlight
    }

    /// Returns the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the display as plain text.
    pub fn to_text(&self, numbered: bool) -> String {
        let mut board = Board::new();
        for position in Position::ALL {
            if let Square::Occupied(player) = self.cell(position) {
                board.place(position, player);
            }
        }
        let mut text = board.display(numbered);
        if let Some(line) = self.highlight {
            let labels: Vec<_> = line.iter().map(Position::label).collect();
            text.push_str(&format!("\n\nWinning line: {}", labels.join(", ")));
        }
        text.push_str(&format!("\n\n{}", self.message));
        text
    }
}

impl Presenter for DisplayState {
    fn render_cell(&mut self, position: Position, square: Square) {
        self.cells[position.to_index()] = square;
    }

    fn render_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn highlight(&mut self, line: &[Position; 3]) {
        self.highlight = Some(*line);
    }

    fn clear_board(&mut self) {
        self.cells = [Square::Empty; 9];
        self.highlight = None;
    }
}

/// Translates input events into engine calls and results into render calls.
#[derive(Debug)]
pub struct GameController<P> {
    engine: GameEngine,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Creates a controller around a fresh engine.
    pub fn new(presenter: P) -> Self {
        Self {
            engine: GameEngine::new(),
            presenter,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Renders the full current state.
    ///
    /// Used for the initial draw and to recover a display that lost sync.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        let snapshot = self.engine.state();
        self.presenter.clear_board();
        for position in Position::ALL {
            let square = snapshot.board().get(position);
            if square != Square::Empty {
                self.presenter.render_cell(position, square);
            }
        }
        if let Some(line) = self.engine.winning_line() {
            self.presenter.highlight(&line);
        }
        self.presenter
            .render_message(&status_message(snapshot.current_player(), &snapshot.status()));
    }

    /// Handles one input event to completion.
    ///
    /// Returns the engine's result for cell selections, `None` for resets.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Option<MoveResult> {
        match event {
            InputEvent::CellSelected(index) => Some(self.select(index)),
            InputEvent::ResetRequested => {
                self.reset();
                None
            }
        }
    }

    fn select(&mut self, index: usize) -> MoveResult {
        let result = self.engine.apply_move(index);
        match &result {
            MoveResult::Accepted(placement) => {
                self.presenter
                    .render_cell(placement.position(), Square::Occupied(placement.mark()));
                if let Some(line) = placement.winning_line() {
                    self.presenter.highlight(&line);
                }
                self.presenter.render_message(&status_message(
                    self.engine.current_player(),
                    &placement.status(),
                ));
            }
            MoveResult::Rejected(reason) => {
                debug!(%reason, "Ignoring rejected move");
            }
        }
        result
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.presenter.clear_board();
        self.presenter.render_message(&status_message(
            self.engine.current_player(),
            &self.engine.status(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(status_message(Player::O, &GameStatus::InProgress), "Player O's Turn");
        assert_eq!(status_message(Player::X, &GameStatus::Won(Player::X)), "Player X Wins!");
        assert_eq!(status_message(Player::O, &GameStatus::Draw), "It's a Draw!");
    }

    #[test]
    fn test_display_text_after_win() {
        let mut controller = GameController::new(DisplayState::new());
        controller.start();
        for index in [0, 3, 1, 4, 2] {
            controller.handle(InputEvent::CellSelected(index));
        }

        let text = controller.presenter().to_text(false);
        assert_eq!(
            text,
            concat!(
                "X|X|X\n-+-+-\nO|O| \n-+-+-\n | | \n\n",
                "Winning line: Top-left, Top-center, Top-right\n\n",
                "Player X Wins!",
            )
        );
    }

    #[test]
    fn test_clear_board_drops_highlight() {
        let mut display = DisplayState::new();
        display.render_cell(Position::Center, Square::Occupied(Player::O));
        display.highlight(&[Position::TopLeft, Position::Center, Position::BottomRight]);
        assert!(display.is_highlighted(Position::Center));

        display.clear_board();
        assert_eq!(display.cell(Position::Center), Square::Empty);
        assert_eq!(display.highlight_line(), None);
    }
}
