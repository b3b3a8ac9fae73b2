//! Tic-tac-toe: board, rules and the move engine.

mod engine;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, GameSnapshot};
pub use outcome::{MoveResult, Placement, Rejection};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
