//! Strictly Tic-Tac-Toe library - a type-safe two-player game engine
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board and turn order and answers
//!   every move with an explicit [`MoveResult`]
//! - **Presentation**: [`GameController`] turns raw input into engine calls
//!   and engine results into [`Presenter`] calls
//! - **Front ends**: a terminal UI and a headless replay, both built on the
//!   same controller
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameStatus, MoveResult, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert!(matches!(engine.apply_move(8), MoveResult::Rejected(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod logging;
mod presentation;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameSnapshot, GameStatus, MoveResult, Placement, Player, Position, Rejection,
    Square, invariants, rules,
};

// Crate-level exports - Logging
pub use logging::{env_filter, log_config};

// Crate-level exports - Presentation
pub use presentation::{DisplayState, GameController, InputEvent, Presenter, status_message};

// Crate-level exports - Front ends
pub use replay::{ReplayReport, replay};
pub use tui::run_tui;
