//! Engine error types.

/// Errors raised when a caller breaks the engine's calling contract.
///
/// None of these are recovered inside the engine. The presentation layer
/// validates input before it gets here and re-prompts on its own.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The position is out of range or already marked.
    #[display("Position {} is not an unmarked square", _0)]
    InvalidMove(u8),

    /// The markers cannot be assigned as requested.
    #[display("Invalid marker assignment: {}", _0)]
    InvalidMarkerAssignment(String),

    /// A human move was offered while the computer is to move.
    #[display("It is not the human's turn")]
    OutOfTurn,

    /// A move was offered after the round ended.
    #[display("Round is already over")]
    RoundAlreadyOver,

    /// A round was requested after a player reached the target score.
    #[display("Match is already decided")]
    MatchAlreadyDecided,

    /// The human move source could not produce a move.
    #[display("Move source failed: {}", _0)]
    MoveSource(String),
}

impl std::error::Error for EngineError {}
