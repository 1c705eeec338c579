//! Turn parity: the color to move follows from the stone counts.

use super::Invariant;
use crate::types::{GameState, Stone};

/// Invariant: black is to move exactly when both colors have placed the
/// same number of stones.
///
/// This also holds after a winning move, because the turn passes to the
/// loser before the win is detected.
pub struct TurnParity;

impl Invariant<GameState> for TurnParity {
    fn holds(state: &GameState) -> bool {
        let black = state.board().count(Stone::Black);
        let white = state.board().count(Stone::White);
        let expected = if black == white {
            Stone::Black
        } else {
            Stone::White
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (black, white, black, ...)"
    }
}
