//! One round of play, from an empty board to a win or a tie.
//!
//! [`RoundState`] is a small state machine:
//!
//! ```text
//! HumanTurn ──place──▶ ComputerTurn ──place──▶ HumanTurn ...
//!      │                    │
//!      └──── line or full ──┴──▶ RoundOver(outcome)
//! ```

use super::action::Move;
use super::contracts::assert_invariants;
use super::error::EngineError;
use super::strategy::{ComputerMove, ComputerStrategy};
use super::{Board, Marker, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RoundOutcome {
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled with no line completed.
    Tie,
}

/// Whose move it is, or how the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the human's move.
    HumanTurn,
    /// The computer moves next.
    ComputerTurn,
    /// Terminal.
    RoundOver(RoundOutcome),
}

/// Supplies the human's moves to a round.
///
/// Implementations usually prompt a person; tests script them.
pub trait HumanMoveSource {
    /// Returns the position the human plays next.
    ///
    /// Positions outside [`Board::unmarked_positions`] are rejected and
    /// this is called again.
    fn choose_position(
        &mut self,
        board: &Board,
        human: &Player,
        computer: &Player,
    ) -> Result<Position, EngineError>;

    /// Called when a returned position was not playable.
    fn rejected(&mut self, _position: Position) {}
}

impl<F> HumanMoveSource for F
where
    F: FnMut(&Board) -> Result<Position, EngineError>,
{
    fn choose_position(
        &mut self,
        board: &Board,
        _human: &Player,
        _computer: &Player,
    ) -> Result<Position, EngineError> {
        self(board)
    }
}

/// State of a round in progress. Borrows the match's board and players.
#[derive(Debug)]
pub struct RoundState<'a> {
    board: &'a mut Board,
    human: &'a Player,
    computer: &'a Player,
    phase: TurnPhase,
    history: Vec<Move>,
}

impl<'a> RoundState<'a> {
    /// Starts a round: clears the board and hands the first move to whoever
    /// holds `first_marker`.
    #[instrument(skip(board, human, computer))]
    pub fn new(
        board: &'a mut Board,
        human: &'a Player,
        computer: &'a Player,
        first_marker: Marker,
    ) -> Self {
        debug_assert_ne!(human.marker(), computer.marker(), "players share a marker");
        board.reset();
        let phase = if human.marker() == first_marker {
            TurnPhase::HumanTurn
        } else {
            TurnPhase::ComputerTurn
        };
        debug!(?phase, "Round started");
        Self {
            board,
            human,
            computer,
            phase,
            history: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The outcome once the round is over.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            TurnPhase::RoundOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Plays the human's move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidMove`] if `pos` is already marked; the phase
    ///   does not change.
    /// - [`EngineError::OutOfTurn`] during the computer's turn.
    /// - [`EngineError::RoundAlreadyOver`] after the round ended.
    #[instrument(skip(self), fields(position = pos.id()))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<TurnPhase, EngineError> {
        match self.phase {
            TurnPhase::HumanTurn => {}
            TurnPhase::ComputerTurn => return Err(EngineError::OutOfTurn),
            TurnPhase::RoundOver(_) => return Err(EngineError::RoundAlreadyOver),
        }
        if !self.board.is_empty(pos) {
            return Err(EngineError::InvalidMove(pos.id()));
        }
        self.place(pos, self.human.marker());
        Ok(self.phase)
    }

    /// Lets the computer pick and play its move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfTurn`] during the human's turn.
    /// - [`EngineError::RoundAlreadyOver`] after the round ended.
    #[instrument(skip(self, strategy))]
    pub fn apply_computer_move(
        &mut self,
        strategy: &mut ComputerStrategy,
    ) -> Result<ComputerMove, EngineError> {
        match self.phase {
            TurnPhase::ComputerTurn => {}
            TurnPhase::HumanTurn => return Err(EngineError::OutOfTurn),
            TurnPhase::RoundOver(_) => return Err(EngineError::RoundAlreadyOver),
        }
        let mv = strategy
            .choose(self.board, self.computer.marker(), self.human.marker())
            .ok_or(EngineError::RoundAlreadyOver)?;
        self.place(mv.position, self.computer.marker());
        Ok(mv)
    }

    /// Alternates turns until the round ends.
    ///
    /// Unplayable positions from `source` are reported back to it through
    /// [`HumanMoveSource::rejected`] and asked for again.
    #[instrument(skip_all)]
    pub fn play_to_end<S>(
        &mut self,
        source: &mut S,
        strategy: &mut ComputerStrategy,
    ) -> Result<RoundOutcome, EngineError>
    where
        S: HumanMoveSource + ?Sized,
    {
        loop {
            match self.phase {
                TurnPhase::RoundOver(outcome) => return Ok(outcome),
                TurnPhase::HumanTurn => {
                    let pos = source.choose_position(self.board, self.human, self.computer)?;
                    match self.apply_human_move(pos) {
                        Ok(_) => {}
                        Err(EngineError::InvalidMove(id)) => {
                            debug!(position = id, "Rejected move on a marked square");
                            source.rejected(pos);
                        }
                        Err(e) => return Err(e),
                    }
                }
                TurnPhase::ComputerTurn => {
                    self.apply_computer_move(strategy)?;
                }
            }
        }
    }

    fn place(&mut self, pos: Position, marker: Marker) {
        self.board.place(pos, marker);
        self.history.push(Move::new(marker, pos));
        assert_invariants(self.board, &self.history);
        debug!(%marker, position = pos.id(), "Marker placed");

        self.phase = match self.terminal_outcome() {
            Some(outcome) => {
                info!(%outcome, moves = self.history.len(), "Round over");
                TurnPhase::RoundOver(outcome)
            }
            None if marker == self.human.marker() => TurnPhase::ComputerTurn,
            None => TurnPhase::HumanTurn,
        };
    }

    fn terminal_outcome(&self) -> Option<RoundOutcome> {
        match self.board.winning_marker() {
            Some(m) if m == self.human.marker() => Some(RoundOutcome::HumanWon),
            Some(_) => Some(RoundOutcome::ComputerWon),
            None if self.board.is_full() => Some(RoundOutcome::Tie),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> (Player, Player) {
        let human = Player::human("Ada", Marker::X);
        let computer = Player::human("Hal", Marker::O);
        (human, computer)
    }

    #[test]
    fn test_first_marker_holder_moves_first() {
        let (human, computer) = players();
        let mut board = Board::new();
        let round = RoundState::new(&mut board, &human, &computer, Marker::X);
        assert_eq!(round.phase(), TurnPhase::HumanTurn);

        let mut board = Board::new();
        let round = RoundState::new(&mut board, &human, &computer, Marker::O);
        assert_eq!(round.phase(), TurnPhase::ComputerTurn);
    }

    #[test]
    fn test_new_round_clears_board() {
        let (human, computer) = players();
        let mut board = Board::new();
        board.place(Position::Center, Marker::O);
        let round = RoundState::new(&mut board, &human, &computer, Marker::X);
        assert_eq!(round.board(), &Board::new());
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        let (human, computer) = players();
        let mut board = Board::new();
        let mut round = RoundState::new(&mut board, &human, &computer, Marker::X);
        let phase = round.apply_human_move(Position::TopLeft).unwrap();
        assert_eq!(phase, TurnPhase::ComputerTurn);
        assert_eq!(round.history(), &[Move::new(Marker::X, Position::TopLeft)]);
    }

    #[test]
    fn test_marked_square_rejected_without_advancing() {
        let (human, computer) = players();
        let mut strategy = ComputerStrategy::new(true, Some(3));
        let mut board = Board::new();
        let mut round = RoundState::new(&mut board, &human, &computer, Marker::O);
        let mv = round.apply_computer_move(&mut strategy).unwrap();
        assert_eq!(mv.position, Position::Center);

        let err = round.apply_human_move(Position::Center).unwrap_err();
        assert_eq!(err, EngineError::InvalidMove(5));
        assert_eq!(round.phase(), TurnPhase::HumanTurn);
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_out_of_turn_moves_rejected() {
        let (human, computer) = players();
        let mut strategy = ComputerStrategy::new(true, Some(3));
        let mut board = Board::new();
        let mut round = RoundState::new(&mut board, &human, &computer, Marker::X);
        assert_eq!(
            round.apply_computer_move(&mut strategy),
            Err(EngineError::OutOfTurn)
        );
        round.apply_human_move(Position::TopLeft).unwrap();
        assert_eq!(
            round.apply_human_move(Position::TopCenter),
            Err(EngineError::OutOfTurn)
        );
    }

    #[test]
    fn test_outcome_matches_final_board() {
        let (human, computer) = players();
        let mut strategy = ComputerStrategy::new(true, Some(11));
        let mut board = Board::new();
        let mut round = RoundState::new(&mut board, &human, &computer, Marker::X);

        // Human completes its own lines when it can, else takes the lowest id.
        while round.outcome().is_none() {
            let target = round
                .board()
                .find_two_in_a_row(Marker::X)
                .or_else(|| round.board().unmarked_positions().first().copied())
                .unwrap();
            round.apply_human_move(target).unwrap();
            if round.outcome().is_none() {
                round.apply_computer_move(&mut strategy).unwrap();
            }
        }
        let outcome = round.outcome().unwrap();
        match round.board().winning_marker() {
            Some(Marker::X) => assert_eq!(outcome, RoundOutcome::HumanWon),
            Some(Marker::O) => assert_eq!(outcome, RoundOutcome::ComputerWon),
            None => {
                assert!(round.board().is_full());
                assert_eq!(outcome, RoundOutcome::Tie);
            }
        }
        assert_eq!(
            round.apply_human_move(Position::Center),
            Err(EngineError::RoundAlreadyOver)
        );
    }

    #[test]
    fn test_closure_source_is_reasked_after_rejection() {
        let (human, computer) = players();
        let mut strategy = ComputerStrategy::new(true, Some(5));
        let mut board = Board::new();
        let mut round = RoundState::new(&mut board, &human, &computer, Marker::O);

        // Always tries the center first, then the first open square.
        let mut asked = 0;
        let mut source = |board: &Board| -> Result<Position, EngineError> {
            asked += 1;
            if asked == 1 {
                Ok(Position::Center)
            } else {
                Ok(board.unmarked_positions()[0])
            }
        };
        let outcome = round.play_to_end(&mut source, &mut strategy).unwrap();
        assert!(asked >= 2);
        assert_eq!(round.outcome(), Some(outcome));
        assert!(round.board().is_full() || round.board().has_winner());
    }

    #[test]
    fn test_source_error_propagates() {
        let (human, computer) = players();
        let mut strategy = ComputerStrategy::new(true, Some(5));
        let mut board = Board::new();
        let mut round = RoundState::new(&mut board, &human, &computer, Marker::X);
        let mut source =
            |_: &Board| -> Result<Position, EngineError> { Err(EngineError::MoveSource("eof".into())) };
        assert_eq!(
            round.play_to_end(&mut source, &mut strategy),
            Err(EngineError::MoveSource("eof".into()))
        );
        assert_eq!(round.phase(), TurnPhase::HumanTurn);
    }
}
