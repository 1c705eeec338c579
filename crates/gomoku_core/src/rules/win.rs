//! Win detection for gomoku.

use crate::board::{Board, Position};
use crate::types::{Cell, Stone};
use tracing::instrument;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Horizontal, vertical, down-right and down-left axes as (d_row, d_col).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether the stone just placed at `pos` completes a run of five.
///
/// Only runs through `pos` are considered, so this is meant to be called
/// after every placement rather than as a whole-board scan. Runs longer than
/// five also win.
#[instrument(skip(board))]
pub fn check_win(board: &Board, pos: Position, stone: Stone) -> bool {
    DIRECTIONS.iter().any(|&(d_row, d_col)| {
        let run = 1 + run_length(board, pos, stone, d_row, d_col)
            + run_length(board, pos, stone, -d_row, -d_col);
        run >= WIN_LENGTH
    })
}

/// Counts matching stones beyond `pos` along one direction, up to four steps.
fn run_length(board: &Board, pos: Position, stone: Stone, d_row: isize, d_col: isize) -> usize {
    (1..WIN_LENGTH as isize)
        .map_while(|step| pos.offset(d_row, d_col, step))
        .take_while(|&next| board.get(next) == Cell::Occupied(stone))
        .count()
}
