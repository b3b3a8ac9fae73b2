//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, GameStatus, Player};
use super::{Invariant, mark_counts};

/// Invariant: the current player follows from the marks on the board.
///
/// While the game runs, X is to move exactly when both players have the
/// same number of marks. Once it ends, the current player is whoever made
/// the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let (x, o) = mark_counts(engine.board());
        let x_moved_last = x > o;

        match engine.status() {
            GameStatus::InProgress => (engine.current_player() == Player::X) != x_moved_last,
            GameStatus::Won(_) | GameStatus::Draw => {
                (engine.current_player() == Player::X) == x_moved_last
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let engine = GameEngine::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_winner_keeps_turn() {
        let mut engine = GameEngine::new();
        for index in [6, 0, 7, 1, 8] {
            engine.apply_move(index);
        }
        assert_eq!(engine.current_player(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4);
        engine.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
