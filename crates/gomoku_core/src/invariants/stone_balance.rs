//! Stone balance: black is never behind white, and at most one stone ahead.

use super::Invariant;
use crate::types::{GameState, Stone};

/// Invariant: `white <= black <= white + 1`.
pub struct StoneBalance;

impl Invariant<GameState> for StoneBalance {
    fn holds(state: &GameState) -> bool {
        let black = state.board().count(Stone::Black);
        let white = state.board().count(Stone::White);
        black == white || black == white + 1
    }

    fn description() -> &'static str {
        "Black has as many stones as white, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_empty_game_holds() {
        assert!(StoneBalance::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_through_play() {
        let engine = GameEngine::new();
        let moves = [(7, 7, Stone::Black), (7, 8, Stone::White), (8, 8, Stone::Black)];
        for (row, col, stone) in moves {
            assert!(engine.make_move(row, col, stone));
            assert!(StoneBalance::holds(&engine.state()));
        }
    }
}
