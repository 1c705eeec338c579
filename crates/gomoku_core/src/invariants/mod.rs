//! First-class invariants for gomoku.
//!
//! Invariants are logical properties that must hold throughout a game. The
//! engine asserts them after every mutation in debug builds, and they are
//! testable independently.

mod monotonic_board;
mod stone_balance;
mod turn_parity;

pub use monotonic_board::{MonotonicBoard, Transition};
pub use stone_balance::StoneBalance;
pub use turn_parity::TurnParity;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants every reachable [`GameState`](crate::GameState) satisfies.
pub type GomokuInvariants = (StoneBalance, TurnParity);

/// Panics if a move broke an invariant. Compiled into debug builds only.
#[cfg(debug_assertions)]
pub(crate) fn assert_move_invariants(before: &crate::GameState, after: &crate::GameState) {
    assert!(
        MonotonicBoard::holds(&Transition::new(before.board(), after.board())),
        "{}",
        MonotonicBoard::description()
    );
    let checked = GomokuInvariants::check_all(after);
    assert!(checked.is_ok(), "{checked:?}");
}
