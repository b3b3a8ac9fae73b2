//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are checked in debug builds and tested independently.

mod alternating_turn;
mod balanced_marks;
mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use status_consistent::StatusConsistentInvariant;

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All tic-tac-toe engine invariants as a composable set.
pub type TicTacToeInvariants = (
    BalancedMarksInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(engine: &super::GameEngine) {
    if let Err(violations) = TicTacToeInvariants::check_all(engine) {
        for violation in &violations {
            warn!(description = %violation.description, "Engine invariant violated");
        }
        debug_assert!(false, "Engine invariants violated: {:?}", violations);
    }
}

/// Counts the marks each player has on the board.
fn mark_counts(board: &super::Board) -> (usize, usize) {
    board
        .squares()
        .iter()
        .fold((0, 0), |(x, o), square| match square.player() {
            Some(super::Player::X) => (x + 1, o),
            Some(super::Player::O) => (x, o + 1),
            None => (x, o),
        })
}
