//! Moves as first-class values.
//!
//! A move is the player's intent, validated by the contracts before the
//! engine applies it.

use crate::board::Position;
use crate::types::Stone;
use serde::Serialize;
use std::fmt;

/// A stone placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    stone: Stone,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(stone: Stone, position: Position) -> Self {
        Self { stone, position }
    }

    /// Color being placed.
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Target intersection.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.stone, self.position)
    }
}
