//! Named board positions, addressed by ids 1-9 in row-major order.
//!
//! ```text
//! 1 | 2 | 3
//! --+---+--
//! 4 | 5 | 6
//! --+---+--
//! 7 | 8 | 9
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (id 1)
    TopLeft,
    /// Top-center (id 2)
    TopCenter,
    /// Top-right (id 3)
    TopRight,
    /// Middle-left (id 4)
    MiddleLeft,
    /// Center (id 5)
    Center,
    /// Middle-right (id 6)
    MiddleRight,
    /// Bottom-left (id 7)
    BottomLeft,
    /// Bottom-center (id 8)
    BottomCenter,
    /// Bottom-right (id 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in id order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Position id (1-9), as typed by the player.
    pub fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Index into the cell array (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from its id (1-9).
    #[instrument]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=9 => Some(Self::ALL[usize::from(id - 1)]),
            _ => None,
        }
    }

    /// Parses a typed id such as `" 7\n"`.
    #[instrument]
    pub fn parse_id(s: &str) -> Option<Self> {
        s.trim().parse::<u8>().ok().and_then(Self::from_id)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
