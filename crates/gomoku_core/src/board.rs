//! The 15x15 board and validated coordinates.

use crate::error::MoveError;
use crate::types::{Cell, Stone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 15;

/// A validated intersection on the board.
///
/// The only way to build one is [`Position::new`], so every `Position` is
/// guaranteed to index inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, rejecting coordinates outside `0..BOARD_SIZE`.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Steps `distance` times along `(d_row, d_col)`, or `None` past the edge.
    pub fn offset(self, d_row: isize, d_col: isize, distance: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row * distance)?;
        let col = self.col.checked_add_signed(d_col * distance)?;
        Self::new(row, col).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 15x15 gomoku board in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Checks if no stone is placed at the position.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts the stones of one color.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(stone))
            .count()
    }

    pub(crate) fn place(&mut self, pos: Position, stone: Stone) {
        self.cells[pos.row][pos.col] = Cell::Occupied(stone);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `X` for black, `O` for white and `.` for empty intersections.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(Stone::Black) => "X",
                    Cell::Occupied(Stone::White) => "O",
                })
                .collect::<Vec<_>>()
                .join(" ");
            f.write_str(&line)?;
            if index + 1 < BOARD_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).is_ok());
        assert!(Position::new(14, 14).is_ok());
        assert_eq!(
            Position::new(15, 3),
            Err(MoveError::OutOfRange { row: 15, col: 3 })
        );
        assert!(Position::new(3, 15).is_err());
    }

    #[test]
    fn test_offset_stops_at_edges() {
        let corner = Position::new(0, 14).unwrap();
        assert_eq!(corner.offset(0, 1, 1), None);
        assert_eq!(corner.offset(-1, 0, 1), None);
        assert_eq!(corner.offset(1, -1, 2), Some(Position::new(2, 12).unwrap()));
    }

    #[test]
    fn test_place_and_count() {
        let mut board = Board::new();
        let pos = Position::new(7, 7).unwrap();
        assert!(board.is_empty(pos));
        board.place(pos, Stone::Black);
        assert_eq!(board.get(pos), Cell::Occupied(Stone::Black));
        assert_eq!(board.count(Stone::Black), 1);
        assert_eq!(board.count(Stone::White), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Position::new(0, 0).unwrap(), Stone::Black);
        board.place(Position::new(0, 1).unwrap(), Stone::White);
        let text = board.to_string();
        assert!(text.starts_with("X O . "));
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }
}
