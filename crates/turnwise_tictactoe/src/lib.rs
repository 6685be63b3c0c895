//! Tic-tac-toe engine for a human playing a scripted computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine [`Cell`]s plus the fixed table of winning lines
//! - **Rules**: win, tie and two-in-a-row detection ([`rules`])
//! - **Strategy**: the computer's ordered tier list ([`Tier`])
//! - **Round**: a turn state machine ending in a [`RoundOutcome`]
//! - **Match**: scores rounds up to a target ([`MatchController`])
//!
//! # Example
//!
//! ```
//! use turnwise_tictactoe::{Board, EngineError, MatchController, MatchSettings, Marker, Position};
//!
//! let settings = MatchSettings::new().with_seed(42);
//! let mut game = MatchController::new("Ada", Marker::X, settings);
//!
//! // Always take the lowest open square.
//! let mut lowest = |board: &Board| -> Result<Position, EngineError> {
//!     Ok(board.unmarked_positions()[0])
//! };
//! let outcome = game.play_round(&mut lowest).unwrap();
//! println!("{outcome}: {} - {}", game.human_score(), game.computer_score());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod error;
mod player;
mod position;
mod round;
mod settings;
mod strategy;
mod types;

pub mod rules;

pub use action::Move;
pub use contracts::{BoardConsistent, HistoryComplete, assert_invariants};
pub use controller::MatchController;
pub use error::EngineError;
pub use player::{COMPUTER_NAMES, Player, Side};
pub use position::Position;
pub use round::{HumanMoveSource, RoundOutcome, RoundState, TurnPhase};
pub use settings::{DEFAULT_TARGET_SCORE, MatchSettings};
pub use strategy::{ComputerMove, ComputerStrategy, Tier};
pub use types::{Board, Cell, Marker};
