//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Replay a list of moves without a UI and print the result
    Replay {
        /// Moves in order, as indices (0-8) or labels like "top-left"
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["strictly_tictactoe", "replay", "0", "center", "--json"])
            .expect("valid args");
        match cli.command {
            Command::Replay { moves, json } => {
                assert_eq!(moves, ["0", "center"]);
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["strictly_tictactoe", "play", "--config", "game.toml"])
            .expect("valid args");
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["strictly_tictactoe", "replay"]).is_err());
    }
}
