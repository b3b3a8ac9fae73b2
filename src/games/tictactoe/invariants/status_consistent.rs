//! Status consistency invariant: the stored status matches the board.

use super::super::{GameEngine, GameStatus, rules};
use super::Invariant;

/// Invariant: the status is exactly what the rules derive from the board.
///
/// A won game also remembers the line that won it; no other status does.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        match (engine.status(), rules::winning_line(board)) {
            (GameStatus::Won(player), Some((winner, line))) => {
                player == winner && engine.winning_line() == Some(line)
            }
            (GameStatus::Draw, None) => rules::is_full(board) && engine.winning_line().is_none(),
            (GameStatus::InProgress, None) => {
                !rules::is_full(board) && engine.winning_line().is_none()
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Status matches the board (win, draw or in progress)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_holds_after_win() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }
        assert!(StatusConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_unreported_win_violates() {
        let mut engine = GameEngine::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            engine.board.place(pos, Player::X);
        }
        assert!(!StatusConsistentInvariant::holds(&engine));
    }
}
