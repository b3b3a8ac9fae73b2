//! Strictly Tic-Tac-Toe - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_tictactoe::{AppConfig, Cli, Command, env_filter, log_config, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            init_file_logging(&config)?;
            log_config(&config, cli.config.as_deref());
            run_tui(&config)
        }
        Command::Replay { moves, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&config))
                .with_writer(std::io::stderr)
                .init();
            log_config(&config, cli.config.as_deref());
            run_replay(&config, &moves, json)
        }
    }
}

/// Route logs to a file so they do not interfere with the TUI
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Replay moves headlessly and print the outcome
fn run_replay(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    info!("Replaying moves");
    let report = replay(moves, config.show_cell_numbers());

    if json {
        println!("{}", serde_json::to_string_pretty(report.snapshot())?);
    } else {
        for line in report.log() {
            println!("{}", line);
        }
        println!("\n{}", report.board());
    }

    Ok(())
}
