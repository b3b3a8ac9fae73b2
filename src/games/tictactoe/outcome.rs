//! Move outcomes for tic-tac-toe.
//!
//! A move either lands on the board or is turned away. Both are ordinary
//! results: rejection is a value the caller matches on, never an error.

use super::{GameStatus, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark that was accepted and written to the board.
///
/// Carries everything a display needs to render the move incrementally:
/// the cell, the mark, the resulting status and, on a win, the line to
/// highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Placement {
    /// Status after the move was evaluated.
    #[getter(copy)]
    status: GameStatus,
    /// Cell that received the mark.
    #[getter(copy)]
    position: Position,
    /// Mark that was written.
    #[getter(copy)]
    mark: Player,
    /// Completed line, present only when the move won the game.
    #[getter(copy)]
    winning_line: Option<[Position; 3]>,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.mark, self.position.label(), self.status)
    }
}

/// Why a move was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The index does not name a cell on the board.
    #[display("Index {} is outside the board (0-8)", index)]
    OutOfRange {
        /// The offending index.
        index: usize,
    },

    /// The square at the position is already occupied.
    #[display("{} is already occupied", position)]
    Occupied {
        /// The occupied position.
        position: Position,
    },

    /// The game is already over.
    #[display("Game is already over ({})", status)]
    GameOver {
        /// Terminal status at the time of the attempt.
        status: GameStatus,
    },
}

/// Result of asking the engine to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was refused; nothing changed.
    Rejected(Rejection),
    /// The move was written to the board.
    Accepted(Placement),
}

impl MoveResult {
    /// Returns true if the move was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// Returns the placement for an accepted move.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            MoveResult::Accepted(placement) => Some(placement),
            MoveResult::Rejected(_) => None,
        }
    }

    /// Returns the rejection reason for a refused move.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            MoveResult::Rejected(reason) => Some(reason),
            MoveResult::Accepted(_) => None,
        }
    }
}
