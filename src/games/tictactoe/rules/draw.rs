//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let layout = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, player);
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        board.place(Position::TopRight, Player::X);
        board.place(Position::MiddleLeft, Player::O);
        board.place(Position::Center, Player::O);

        assert!(!is_draw(&board));
    }
}
