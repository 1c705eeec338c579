//! Move rejection reasons.

use crate::types::Stone;

/// Why a move was rejected. A rejected move never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 15x15 board.
    #[display("Position ({row}, {col}) is outside the board (valid range 0-14)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A player has already won.
    #[display("Game is already finished")]
    GameFinished,

    /// A stone already sits on the intersection.
    #[display("Position is already occupied")]
    Occupied {
        /// Row of the occupied intersection.
        row: usize,
        /// Column of the occupied intersection.
        col: usize,
    },

    /// The stone submitted is not the color to move.
    #[display("Not your turn (current turn: {current})")]
    WrongTurn {
        /// Color whose turn it is.
        current: Stone,
    },
}

impl std::error::Error for MoveError {}
