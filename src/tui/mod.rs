//! Terminal UI for Strictly Tic-Tac-Toe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use app::App;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before returning, also when the loop fails.
/// Panics are covered by the hook `ratatui::try_init` installs.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe TUI");

    let mut terminal = ratatui::try_init()?;
    let mut app = App::new(config.show_cell_numbers());
    let res = run_app(&mut terminal, &mut app, event::read);
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Input events are handled one at a time, each to completion, before the
/// next frame is drawn.
fn run_app<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = next_event()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
