//! Win detection logic for tic-tac-toe.

use super::lines::{Line, WINNING_LINES};
use crate::{Board, Cell, Marker};
use tracing::{instrument, warn};

/// Marker that fills `line`, if all three cells agree.
fn line_owner(board: &Board, [a, b, c]: Line) -> Option<Marker> {
    let cell = board.get(a);
    match cell {
        Cell::Marked(m) if cell == board.get(b) && cell == board.get(c) => Some(m),
        _ => None,
    }
}

/// Completed lines in scan order, paired with the marker holding each.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = (Line, Marker)> + '_ {
    WINNING_LINES
        .into_iter()
        .filter_map(move |line| line_owner(board, line).map(|m| (line, m)))
}

/// True when lines are completed by both markers at once.
pub fn has_conflicting_lines(board: &Board) -> bool {
    let mut owners = completed_lines(board).map(|(_, m)| m);
    match owners.next() {
        Some(first) => owners.any(|m| m != first),
        None => false,
    }
}

/// Returns the marker holding a completed line.
///
/// Should both markers hold a line (a board no alternating game reaches),
/// the first line in scan order wins and the anomaly is logged.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    let winner = completed_lines(board).next().map(|(_, m)| m);
    if winner.is_some() && has_conflicting_lines(board) {
        warn!(?winner, "Both markers hold a completed line");
    }
    winner
}
