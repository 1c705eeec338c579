//! Move preconditions.
//!
//! Each precondition is a small named check; [`LegalMove`] composes them in
//! the order that decides which reason a rejected move reports.

use crate::action::Move;
use crate::error::MoveError;
use crate::types::GameState;
use tracing::instrument;

/// Precondition: nobody has won yet.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`MoveError::GameFinished`] on a terminal state.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target intersection is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::Occupied`] if a stone is already there.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        let pos = mov.position();
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::Occupied {
                row: pos.row(),
                col: pos.col(),
            })
        }
    }
}

/// Precondition: the stone is the color to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongTurn`] otherwise.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.stone() == state.current_player() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn {
                current: state.current_player(),
            })
        }
    }
}

/// Composite precondition: game in progress, cell empty, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip_all, fields(mov = %mov))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameInProgress::check(state)?;
        CellIsEmpty::check(mov, state)?;
        PlayersTurn::check(mov, state)?;
        Ok(())
    }
}
