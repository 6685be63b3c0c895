//! Core domain types for tic-tac-toe.

use super::error::EngineError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two symbols in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Marker {
    /// The X marker.
    X,
    /// The O marker.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Symbol drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Marker {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Marker::X),
            "O" => Ok(Marker::O),
            other => Err(EngineError::InvalidMarkerAssignment(format!(
                "'{}' is not X or O",
                other
            ))),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unmarked cell.
    #[default]
    Empty,
    /// Cell holding a marker.
    Marked(Marker),
}

impl Cell {
    /// Returns true if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (ids 1-9 at indices 0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns all cells in id order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Places `marker` at `pos`.
    ///
    /// The position must be unmarked; callers filter through
    /// [`Board::unmarked_positions`] first.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) {
        debug_assert!(
            self.get(pos).is_empty(),
            "position {} is already marked",
            pos.id()
        );
        self.cells[pos.index()] = Cell::Marked(marker);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Positions still empty, in ascending id order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn marker_count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(marker))
            .count()
    }

    /// True once no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Marker holding a completed line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// True when some line is completed.
    pub fn has_winner(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Every completed line with the marker that completed it, in scan order.
    pub fn completed_lines(&self) -> Vec<(rules::Line, Marker)> {
        rules::completed_lines(self).collect()
    }

    /// True when both markers have completed a line.
    ///
    /// Unreachable under alternating play; only hand-built boards get here.
    pub fn has_conflicting_lines(&self) -> bool {
        rules::has_conflicting_lines(self)
    }

    /// Empty cell that would complete a line for `marker`.
    pub fn find_two_in_a_row(&self, marker: Marker) -> Option<Position> {
        rules::find_two_in_a_row(self, marker)
    }

    /// True while position 5 is empty.
    pub fn center_is_empty(&self) -> bool {
        self.is_empty(Position::Center)
    }
}
