//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The board's query methods
//! delegate here so each rule can be tested on its own.

pub mod draw;
pub mod lines;
pub mod threat;
pub mod win;

pub use draw::{is_full, is_tie};
pub use lines::{Line, WINNING_LINES};
pub use threat::find_two_in_a_row;
pub use win::{completed_lines, has_conflicting_lines, winning_marker};
