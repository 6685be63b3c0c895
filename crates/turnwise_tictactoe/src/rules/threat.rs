//! Two-in-a-row detection, the basis of the computer's offense and defense.

use super::lines::WINNING_LINES;
use crate::{Board, Cell, Marker, Position};
use tracing::instrument;

/// Finds the empty cell that completes a line for `marker`.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first line holding
/// exactly two `marker` cells plus one empty cell decides the answer.
#[instrument(skip(board))]
pub fn find_two_in_a_row(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES.into_iter().find_map(|line| {
        let cells = line.map(|pos| board.get(pos));
        let held = cells.iter().filter(|c| **c == Cell::Marked(marker)).count();
        let open = cells.iter().filter(|c| c.is_empty()).count();
        if held == 2 && open == 1 {
            line.into_iter().find(|pos| board.is_empty(*pos))
        } else {
            None
        }
    })
}
