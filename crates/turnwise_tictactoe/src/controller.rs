//! Match controller: rounds, scores, and marker assignment.

use super::error::EngineError;
use super::player::Side;
use super::round::{HumanMoveSource, RoundOutcome, RoundState};
use super::settings::MatchSettings;
use super::strategy::ComputerStrategy;
use super::{Board, Marker, Player};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// Plays rounds between a human and the computer until one reaches the
/// target score.
///
/// Scores survive between rounds and are cleared only by
/// [`MatchController::reset_scores`]. Once a side reaches the target the
/// controller refuses further rounds until reset.
#[derive(Debug, Getters)]
pub struct MatchController {
    /// The board, reused by every round.
    board: Board,
    /// The human player.
    human: Player,
    /// The computer player.
    computer: Player,
    /// Settings fixed for this match.
    settings: MatchSettings,
    #[getter(skip)]
    first_marker: Marker,
    #[getter(skip)]
    strategy: ComputerStrategy,
    #[getter(skip)]
    human_score: u32,
    #[getter(skip)]
    computer_score: u32,
    #[getter(skip)]
    rounds_played: u32,
}

impl MatchController {
    /// Creates a match; the computer takes whichever marker the human did not.
    ///
    /// Unless `settings` names a first marker, `human_marker` opens every
    /// round. A target score of zero is raised to one.
    #[instrument(skip(human_name))]
    pub fn new(human_name: impl Into<String>, human_marker: Marker, mut settings: MatchSettings) -> Self {
        if settings.target_score == 0 {
            warn!("Target score of zero raised to one");
            settings.target_score = 1;
        }
        let first_marker = settings.first_marker.unwrap_or(human_marker);
        let mut strategy = ComputerStrategy::new(settings.center_priority, settings.seed);
        let human = Player::human(human_name, human_marker);
        let computer = Player::computer(human_marker.opponent(), strategy.rng_mut());
        info!(
            human = %human.name(),
            computer = %computer.name(),
            target = settings.target_score,
            %first_marker,
            "Match created"
        );
        Self {
            board: Board::new(),
            human,
            computer,
            settings,
            first_marker,
            strategy,
            human_score: 0,
            computer_score: 0,
            rounds_played: 0,
        }
    }

    /// Round wins by the human.
    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    /// Round wins by the computer.
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// Marker that opens every round, resolved at creation.
    pub fn first_marker(&self) -> Marker {
        self.first_marker
    }

    /// Rounds completed since creation or the last reset.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The side that reached the target score, if any.
    pub fn match_winner(&self) -> Option<Side> {
        let target = self.settings.target_score;
        if self.human_score >= target {
            Some(Side::Human)
        } else if self.computer_score >= target {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// True once a side has reached the target score.
    pub fn is_decided(&self) -> bool {
        self.match_winner().is_some()
    }

    /// Plays one round to completion and scores it.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MatchAlreadyDecided`] once a side reached the target.
    /// - Whatever `source` fails with; the round is abandoned unscored.
    #[instrument(skip_all, fields(round = self.rounds_played + 1))]
    pub fn play_round<S>(&mut self, source: &mut S) -> Result<RoundOutcome, EngineError>
    where
        S: HumanMoveSource + ?Sized,
    {
        if self.is_decided() {
            return Err(EngineError::MatchAlreadyDecided);
        }
        let mut round = RoundState::new(
            &mut self.board,
            &self.human,
            &self.computer,
            self.first_marker,
        );
        let outcome = round.play_to_end(source, &mut self.strategy)?;
        self.record_outcome(outcome);
        Ok(outcome)
    }

    /// Credits the round winner; ties score nothing.
    pub(crate) fn record_outcome(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::HumanWon => self.human_score += 1,
            RoundOutcome::ComputerWon => self.computer_score += 1,
            RoundOutcome::Tie => {}
        }
        self.rounds_played += 1;
        info!(
            %outcome,
            human_score = self.human_score,
            computer_score = self.computer_score,
            "Round scored"
        );
    }

    /// Gives the human `human_choice` and the computer the other marker.
    ///
    /// A round in progress holds the controller mutably borrowed, so this
    /// can only run between rounds.
    #[instrument(skip(self))]
    pub fn reassign_markers(&mut self, human_choice: Marker) {
        self.human.set_marker(human_choice);
        self.computer.set_marker(human_choice.opponent());
        debug_assert_ne!(self.human.marker(), self.computer.marker());
    }

    /// Clears both scores for a full-match restart.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.human_score = 0;
        self.computer_score = 0;
        self.rounds_played = 0;
        self.board.reset();
        info!("Scores reset");
    }
}
