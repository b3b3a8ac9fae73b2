//! Balanced marks invariant: X never trails O, and leads by at most one.

use super::super::GameEngine;
use super::{Invariant, mark_counts};

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let (x, o) = mark_counts(engine.board());
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
