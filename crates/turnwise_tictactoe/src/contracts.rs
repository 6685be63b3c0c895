//! Debug-build checks of the board's consistency invariants.
//!
//! The engine trusts its callers, so these run only under
//! `debug_assertions` and panic on violation.

use super::action::Move;
use super::{Board, Marker};
use tracing::{instrument, warn};

/// Invariant: marker counts differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the invariant.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.marker_count(Marker::X);
        let o_count = board.marker_count(Marker::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: every marked cell was placed by a recorded move, in alternation.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks the invariant.
    #[instrument(skip(board, history))]
    pub fn holds(board: &Board, history: &[Move]) -> bool {
        let filled = board.cells().iter().filter(|c| !c.is_empty()).count();
        let alternates = history.windows(2).all(|w| w[0].marker != w[1].marker);
        let matches_board = history
            .iter()
            .all(|mv| board.get(mv.position).marker() == Some(mv.marker));
        let valid = filled == history.len() && alternates && matches_board;
        if !valid {
            warn!(filled, history_len = history.len(), "History completeness violated");
        }
        valid
    }
}

/// Asserts all round invariants (panics on violation in debug builds).
pub fn assert_invariants(board: &Board, history: &[Move]) {
    debug_assert!(BoardConsistent::holds(board), "Board consistency violated");
    debug_assert!(
        HistoryComplete::holds(board, history),
        "History completeness violated"
    );
}
