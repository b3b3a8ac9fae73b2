//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first uniformly
/// occupied one is returned along with its owner. Boards with several
/// completed lines still report only the first.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let first = board.get(a);
        match first {
            Square::Occupied(player) if board.get(b) == first && board.get(c) == first => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
