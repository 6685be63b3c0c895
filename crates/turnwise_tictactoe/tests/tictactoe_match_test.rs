//! Match-level tests: rounds played through the controller.

use std::collections::HashMap;
use turnwise_tictactoe::{
    Board, Cell, EngineError, HumanMoveSource, MatchController, MatchSettings, Marker, Player,
    Position, RoundOutcome, Side,
};

/// Human player that knows the computer's tier list and plays the move with
/// the best expected result, treating any chance of losing as unacceptable.
#[derive(Default)]
struct Exploiter {
    memo: HashMap<([Cell; 9], Marker, bool), f64>,
}

const LOSS: f64 = -1_000_000.0;

impl Exploiter {
    /// Positions the computer may answer with, all equally likely.
    fn computer_replies(board: &Board, computer: Marker, human: Marker) -> Vec<Position> {
        if let Some(pos) = board.find_two_in_a_row(computer) {
            vec![pos]
        } else if let Some(pos) = board.find_two_in_a_row(human) {
            vec![pos]
        } else if board.center_is_empty() {
            vec![Position::Center]
        } else {
            board.unmarked_positions()
        }
    }

    fn value(&mut self, board: &Board, human: Marker, human_to_move: bool) -> f64 {
        match board.winning_marker() {
            Some(m) if m == human => return 1.0,
            Some(_) => return LOSS,
            None if board.is_full() => return 0.0,
            None => {}
        }
        let key = (*board.cells(), human, human_to_move);
        if let Some(v) = self.memo.get(&key) {
            return *v;
        }
        let v = if human_to_move {
            board
                .unmarked_positions()
                .into_iter()
                .map(|pos| {
                    let mut next = board.clone();
                    next.place(pos, human);
                    self.value(&next, human, false)
                })
                .fold(f64::NEG_INFINITY, f64::max)
        } else {
            let replies = Self::computer_replies(board, human.opponent(), human);
            let n = replies.len() as f64;
            replies
                .into_iter()
                .map(|pos| {
                    let mut next = board.clone();
                    next.place(pos, human.opponent());
                    self.value(&next, human, true)
                })
                .sum::<f64>()
                / n
        };
        self.memo.insert(key, v);
        v
    }
}

impl HumanMoveSource for Exploiter {
    fn choose_position(
        &mut self,
        board: &Board,
        human: &Player,
        _computer: &Player,
    ) -> Result<Position, EngineError> {
        let marker = human.marker();
        let mut best: Option<(f64, Position)> = None;
        for pos in board.unmarked_positions() {
            let mut next = board.clone();
            next.place(pos, marker);
            let v = self.value(&next, marker, false);
            if best.is_none_or(|(b, _)| v > b) {
                best = Some((v, pos));
            }
        }
        best.map(|(_, pos)| pos)
            .ok_or_else(|| EngineError::MoveSource("board is full".into()))
    }
}

#[test]
fn test_human_wins_accumulate_until_reset() {
    let settings = MatchSettings::new().with_seed(17).with_target_score(3);
    let mut game = MatchController::new("Ada", Marker::X, settings);
    let mut human = Exploiter::default();

    let mut rounds = 0;
    while !game.is_decided() {
        let before = game.human_score();
        let outcome = game.play_round(&mut human).unwrap();
        assert_ne!(outcome, RoundOutcome::ComputerWon);
        assert_eq!(game.computer_score(), 0);
        match outcome {
            RoundOutcome::HumanWon => assert_eq!(game.human_score(), before + 1),
            _ => assert_eq!(game.human_score(), before),
        }
        rounds += 1;
        assert!(rounds < 200, "human failed to reach three wins");
    }
    assert_eq!(game.human_score(), 3);
    assert_eq!(game.match_winner(), Some(Side::Human));

    game.reset_scores();
    assert_eq!((game.human_score(), game.computer_score()), (0, 0));
    assert!(!game.is_decided());
}

#[test]
fn test_reassign_markers_between_rounds() {
    let mut game = MatchController::new("Ada", Marker::X, MatchSettings::new().with_seed(3));
    let mut human = Exploiter::default();
    game.play_round(&mut human).unwrap();

    game.reassign_markers(Marker::O);
    assert_eq!(game.human().marker(), Marker::O);
    assert_eq!(game.computer().marker(), Marker::X);
    assert_ne!(game.human().marker(), game.computer().marker());

    // X still moves first, so the computer opens from the center.
    let outcome = game.play_round(&mut human).unwrap();
    assert_ne!(outcome, RoundOutcome::ComputerWon);
    assert_eq!(game.rounds_played(), 2);
}

#[test]
fn test_computer_name_fixed_for_match() {
    let mut game = MatchController::new("Ada", Marker::X, MatchSettings::new().with_seed(8));
    let name = game.computer().name().clone();
    let mut human = Exploiter::default();
    game.play_round(&mut human).unwrap();
    game.reassign_markers(Marker::O);
    game.reset_scores();
    assert_eq!(game.computer().name(), &name);
}

#[test]
fn test_board_keeps_final_position_until_next_round() {
    let mut game = MatchController::new("Ada", Marker::X, MatchSettings::new().with_seed(5));
    let mut human = Exploiter::default();
    game.play_round(&mut human).unwrap();
    assert!(game.board().is_full() || game.board().has_winner());
    let scored = game.human_score() + game.computer_score();

    game.play_round(&mut human).unwrap();
    assert!(game.human_score() + game.computer_score() >= scored);
    assert_eq!(game.rounds_played(), 2);
}

/// Open squares on the board the first time the human is asked to move.
fn open_squares_at_first_prompt(game: &mut MatchController) -> usize {
    let mut first_seen: Option<usize> = None;
    let mut lowest = |board: &Board| -> Result<Position, EngineError> {
        first_seen.get_or_insert(board.unmarked_positions().len());
        Ok(board.unmarked_positions()[0])
    };
    game.play_round(&mut lowest).unwrap();
    first_seen.unwrap()
}

#[test]
fn test_human_opens_with_either_marker_by_default() {
    for marker in [Marker::X, Marker::O] {
        let mut game = MatchController::new("Ada", marker, MatchSettings::new().with_seed(4));
        assert_eq!(open_squares_at_first_prompt(&mut game), 9);
    }
}

#[test]
fn test_configured_first_marker_hands_computer_the_opening() {
    let settings = MatchSettings::new().with_seed(4).with_first_marker(Marker::X);
    let mut game = MatchController::new("Ada", Marker::O, settings);
    assert_eq!(open_squares_at_first_prompt(&mut game), 8);
}
