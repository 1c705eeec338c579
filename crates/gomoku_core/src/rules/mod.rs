//! Game rules for gomoku.
//!
//! Pure functions over a board. Rules are separated from board storage so
//! the engine and the contracts can compose them.

pub mod win;

pub use win::{WIN_LENGTH, check_win};
