//! Headless replay of a move list.

use crate::games::tictactoe::{GameSnapshot, MoveResult, Position};
use crate::presentation::{DisplayState, GameController, InputEvent};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// Outcome of replaying a list of moves.
#[derive(Debug, Clone, Getters)]
pub struct ReplayReport {
    /// One line per move, describing what happened to it.
    log: Vec<String>,
    /// Final display, rendered as text.
    board: String,
    /// Final engine state.
    snapshot: GameSnapshot,
}

/// Feeds moves through a [`GameController`] as if a user had entered them.
///
/// Each move may be an index or a position label. Numbers outside 0-8 are
/// still sent to the engine and come back rejected; anything else is
/// skipped without touching the game.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(moves: &[S], numbered: bool) -> ReplayReport {
    let mut controller = GameController::new(DisplayState::new());
    controller.start();

    let mut log = Vec::with_capacity(moves.len());
    for raw in moves {
        let raw = raw.as_ref();
        let index = match Position::from_label_or_number(raw) {
            Some(position) => position.to_index(),
            None => match raw.trim().parse::<usize>() {
                Ok(index) => index,
                Err(_) => {
                    warn!(input = raw, "Unrecognized move");
                    log.push(format!("{raw:?} is not a board position"));
                    continue;
                }
            },
        };

        match controller.handle(InputEvent::CellSelected(index)) {
            Some(MoveResult::Accepted(placement)) => log.push(placement.to_string()),
            Some(MoveResult::Rejected(reason)) => {
                warn!(input = raw, %reason, "Replay move rejected");
                log.push(format!("{raw:?} rejected: {reason}"));
            }
            None => {}
        }
    }

    let snapshot = controller.engine().state();
    info!(status = %snapshot.status(), "Replay finished");
    ReplayReport {
        log,
        board: controller.presenter().to_text(numbered),
        snapshot,
    }
}
