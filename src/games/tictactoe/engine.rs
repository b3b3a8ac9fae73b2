//! Game engine for tic-tac-toe.

use super::invariants::assert_invariants;
use super::outcome::{MoveResult, Placement, Rejection};
use super::rules;
use super::types::{Board, GameStatus, Player};
use super::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Read-only copy of the engine state, for a full render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Player whose mark the next accepted move writes.
    #[getter(copy)]
    current_player: Player,
    /// Game status.
    #[getter(copy)]
    status: GameStatus,
}

/// Tic-tac-toe game engine.
///
/// Owns the board and turn order. The engine is a pure state machine:
/// it never renders, and every operation completes synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) status: GameStatus,
    pub(super) winning_line: Option<[Position; 3]>,
}

impl GameEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            status: self.status,
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Rejected moves leave the engine untouched. An accepted move is
    /// evaluated in order: win, then draw, and only then is the turn
    /// passed to the opponent.
    #[instrument(skip(self), fields(player = %self.current_player, status = %self.status))]
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        if self.status.is_terminal() {
            debug!("Move rejected, game is over");
            return MoveResult::Rejected(Rejection::GameOver {
                status: self.status,
            });
        }

        let Some(position) = Position::from_index(index) else {
            warn!(index, "Move index outside the board");
            return MoveResult::Rejected(Rejection::OutOfRange { index });
        };

        if !self.board.is_empty(position) {
            debug!(%position, "Move rejected, square occupied");
            return MoveResult::Rejected(Rejection::Occupied { position });
        }

        let mark = self.current_player;
        self.board.place(position, mark);

        if let Some((winner, line)) = rules::winning_line(&self.board) {
            info!(%winner, ?line, "Game won");
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mark.opponent();
        }

        assert_invariants(self);
        debug!(%position, next = %self.current_player, "Move accepted");
        MoveResult::Accepted(Placement::new(self.status, position, mark, self.winning_line))
    }

    /// Restores the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play(engine: &mut GameEngine, moves: &[usize]) -> Vec<MoveResult> {
        moves.iter().map(|&i| engine.apply_move(i)).collect()
    }

    #[test]
    fn test_first_move_marks_x_and_passes_turn() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(4);

        assert_eq!(
            result,
            MoveResult::Accepted(Placement::new(
                GameStatus::InProgress,
                Position::Center,
                Player::X,
                None
            ))
        );
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_win_keeps_current_player() {
        let mut engine = GameEngine::new();
        let results = play(&mut engine, &[0, 3, 1, 4, 2]);

        let last = results.last().and_then(|r| r.placement()).copied();
        let placement = last.expect("winning move accepted");
        assert_eq!(placement.status(), GameStatus::Won(Player::X));
        assert_eq!(
            placement.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.winning_line(), placement.winning_line());
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let mut engine = GameEngine::new();
        engine.apply_move(0);
        let before = engine.clone();

        assert_eq!(
            engine.apply_move(9),
            MoveResult::Rejected(Rejection::OutOfRange { index: 9 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(
            engine.apply_move(42),
            MoveResult::Rejected(Rejection::GameOver {
                status: GameStatus::Won(Player::X)
            })
        );
    }

    #[test]
    fn test_reset_clears_winning_line() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.reset();

        assert_eq!(engine, GameEngine::new());
        assert_eq!(engine.winning_line(), None);
    }

    #[test]
    fn test_snapshot_mirrors_engine() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[4, 0]);
        let snapshot = engine.state();

        assert_eq!(snapshot.board(), engine.board());
        assert_eq!(snapshot.current_player(), Player::X);
        assert_eq!(snapshot.status(), GameStatus::InProgress);
    }
}
