//! Draw detection logic for tic-tac-toe.

use super::win::winning_marker;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no cell left unmarked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no completed line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && winning_marker(board).is_none()
}
