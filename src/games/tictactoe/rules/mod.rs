//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and the tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};
