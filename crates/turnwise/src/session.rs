//! The console session: welcome, matches played to the target, goodbye.

use crate::config::GameConfig;
use crate::console::Console;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use turnwise_tictactoe::{EngineError, MatchController, Marker, RoundOutcome, Side};

/// Summary of a finished session, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionReport {
    /// Rounds completed in the last match.
    pub rounds_played: u32,
    /// Human score in the last match.
    pub human_score: u32,
    /// Computer score in the last match.
    pub computer_score: u32,
    /// Winner of the last match, if it reached the target.
    pub overall_winner: Option<Side>,
}

impl SessionReport {
    fn from_match(game: &MatchController) -> Self {
        Self {
            rounds_played: game.rounds_played(),
            human_score: game.human_score(),
            computer_score: game.computer_score(),
            overall_winner: game.match_winner(),
        }
    }
}

/// How a match ended.
enum MatchEnd {
    /// A side reached the target score.
    Decided,
    /// The player declined another round.
    Declined,
    /// Input ran out.
    Closed,
}

/// Runs a complete session over `console`.
///
/// # Errors
///
/// Fails on output errors or engine errors other than closed input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &GameConfig) -> Result<SessionReport> {
    console.clear()?;
    console.say("Welcome to Tic Tac Toe!")?;
    console.say("")?;

    let name = match config.player_name() {
        Some(name) if !name.trim().is_empty() => Some(name.trim().to_string()),
        _ => console.ask_name()?,
    };
    let Some(name) = name else {
        return goodbye(console, SessionReport::default());
    };

    let settings = *config.match_settings();
    let mut game = MatchController::new(name, Marker::X, settings);
    loop {
        let end = play_match(console, &mut game)?;
        let report = SessionReport::from_match(&game);
        match end {
            MatchEnd::Declined => return goodbye(console, report),
            MatchEnd::Closed => {
                info!("Input closed; ending session");
                return goodbye(console, report);
            }
            MatchEnd::Decided => {}
        }

        console.say(match game.match_winner() {
            Some(Side::Human) => "You are the overall winner!",
            _ => "The computer is the overall winner!",
        })?;
        let question = format!("Play to {} again? (y/n)", settings.target_score);
        if console.ask_yes_no(&question)? != Some(true) {
            return goodbye(console, report);
        }
        game.reset_scores();
        info!("Starting a new match");
    }
}

/// Plays rounds until the target is reached or the player stops.
fn play_match<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut MatchController,
) -> Result<MatchEnd> {
    loop {
        let Some(marker) = console.ask_marker()? else {
            return Ok(MatchEnd::Closed);
        };
        game.reassign_markers(marker);

        let outcome = match game.play_round(&mut *console) {
            Ok(outcome) => outcome,
            Err(EngineError::MoveSource(_)) if console.is_closed() => return Ok(MatchEnd::Closed),
            Err(e) => return Err(e).context("Round failed"),
        };

        console.show_board(game.board(), game.human(), game.computer())?;
        console.say(match outcome {
            RoundOutcome::HumanWon => "You won!",
            RoundOutcome::ComputerWon => "Computer won!",
            RoundOutcome::Tie => "It's a tie!",
        })?;
        console.say(format!("{}: {}", game.human().name(), game.human_score()))?;
        console.say(format!("{}: {}", game.computer().name(), game.computer_score()))?;

        if game.is_decided() {
            return Ok(MatchEnd::Decided);
        }
        match console.ask_yes_no("Would you like to play again? (y/n)")? {
            Some(true) => {
                console.say("Let's play again!")?;
                console.say("")?;
            }
            Some(false) => return Ok(MatchEnd::Declined),
            None => return Ok(MatchEnd::Closed),
        }
    }
}

fn goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>, report: SessionReport) -> Result<SessionReport> {
    console.say("Thanks for playing Tic Tac Toe! Goodbye!")?;
    info!(?report, "Session finished");
    Ok(report)
}
