//! Core domain types for gomoku.

use crate::action::Move;
use crate::board::Board;
use serde::{Deserialize, Serialize};

/// A player color. Black always moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stone {
    /// Black stones (first to move).
    Black,
    /// White stones.
    White,
}

impl Stone {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// A single intersection on the board.
///
/// Serialized as `null` when empty and as the stone color otherwise, which
/// is the shape web clients render directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Stone>", into = "Option<Stone>")]
pub enum Cell {
    /// No stone placed.
    #[default]
    Empty,
    /// Intersection holding a stone.
    Occupied(Stone),
}

impl Cell {
    /// Returns the stone on this cell, if any.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(stone) => Some(stone),
        }
    }
}

impl From<Option<Stone>> for Cell {
    fn from(stone: Option<Stone>) -> Self {
        stone.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Stone> {
    fn from(cell: Cell) -> Self {
        cell.stone()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameStatus {
    /// Moves are still accepted.
    Playing,
    /// Black completed a run of five.
    BlackWins,
    /// White completed a run of five.
    WhiteWins,
}

impl GameStatus {
    /// The terminal status for a win by `stone`.
    pub fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => GameStatus::BlackWins,
            Stone::White => GameStatus::WhiteWins,
        }
    }

    /// Returns the winner, or `None` while the game is still being played.
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameStatus::Playing => None,
            GameStatus::BlackWins => Some(Stone::Black),
            GameStatus::WhiteWins => Some(Stone::White),
        }
    }
}

/// Complete game state.
///
/// Values of this type handed out by the engine are owned snapshots; mutating
/// one never affects the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Color whose move is legal next.
    #[serde(rename = "currentPlayer")]
    current_player: Stone,
    /// Game status.
    #[serde(rename = "gameStatus")]
    status: GameStatus,
}

impl GameState {
    /// Creates the initial state: empty board, black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            status: GameStatus::Playing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color whose move is legal next.
    ///
    /// After a winning move this is the loser's color: the turn still passes
    /// even though no further move will be accepted.
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once a player has won.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Places the stone and passes the turn (unchecked - use the engine for validation).
    pub(crate) fn apply_move(&mut self, mov: &Move) {
        self.board.place(mov.position(), mov.stone());
        self.current_player = mov.stone().opponent();
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Stone::Black.opponent(), Stone::White);
        assert_eq!(Stone::White.opponent(), Stone::Black);
    }

    #[test]
    fn test_stone_names() {
        assert_eq!(Stone::Black.to_string(), "black");
        assert_eq!("white".parse::<Stone>(), Ok(Stone::White));
        assert!("red".parse::<Stone>().is_err());
    }

    #[test]
    fn test_cell_serializes_as_nullable_color() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Cell::Occupied(Stone::White)).unwrap(),
            "\"white\""
        );
        let cell: Cell = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(cell, Cell::Occupied(Stone::Black));
    }

    #[test]
    fn test_status_names() {
        assert_eq!(GameStatus::BlackWins.to_string(), "black-wins");
        assert_eq!(
            serde_json::to_string(&GameStatus::WhiteWins).unwrap(),
            "\"white-wins\""
        );
        assert_eq!(GameStatus::won_by(Stone::White).winner(), Some(Stone::White));
        assert_eq!(GameStatus::Playing.winner(), None);
    }

    #[test]
    fn test_state_field_names() {
        let json = serde_json::to_value(GameState::new()).unwrap();
        assert_eq!(json["currentPlayer"], "black");
        assert_eq!(json["gameStatus"], "playing");
        assert_eq!(json["board"].as_array().unwrap().len(), 15);
        assert!(json["board"][14][14].is_null());
    }
}
