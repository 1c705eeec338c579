//! Monotonic board invariant: stones never change once placed.

use super::Invariant;
use crate::board::Board;
use crate::types::Cell;

/// A board before and after one mutation.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    before: &'a Board,
    after: &'a Board,
}

impl<'a> Transition<'a> {
    /// Pairs the two boards.
    pub fn new(before: &'a Board, after: &'a Board) -> Self {
        Self { before, after }
    }
}

/// Invariant: every occupied cell of `before` holds the same stone in `after`.
///
/// Only meaningful for moves; a reset deliberately clears the board.
pub struct MonotonicBoard;

impl Invariant<Transition<'_>> for MonotonicBoard {
    fn holds(transition: &Transition<'_>) -> bool {
        transition
            .before
            .rows()
            .iter()
            .flatten()
            .zip(transition.after.rows().iter().flatten())
            .all(|(before, after)| *before == Cell::Empty || before == after)
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
