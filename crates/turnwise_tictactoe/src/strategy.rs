//! The computer opponent's move selection.
//!
//! Moves are picked by a fixed list of tiers evaluated in order; the first
//! tier that proposes a position wins:
//!
//! 1. [`Tier::Offense`]: complete the computer's own line.
//! 2. [`Tier::Defense`]: block the human's line.
//! 3. [`Tier::Center`]: take position 5.
//! 4. [`Tier::Random`]: any unmarked position, uniformly.
//!
//! The list looks one ply ahead and no further, so forks beat it.

use super::{Board, Marker, Position};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One rule in the computer's priority list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Tier {
    /// Complete a line the computer already holds two of.
    Offense,
    /// Block a line the human holds two of.
    Defense,
    /// Take the center square.
    Center,
    /// Pick any unmarked square at random.
    Random,
}

impl Tier {
    /// Evaluation order, highest priority first.
    pub const ORDER: [Tier; 4] = [Tier::Offense, Tier::Defense, Tier::Center, Tier::Random];

    /// The position this tier would play, if it applies.
    pub fn propose(
        self,
        board: &Board,
        computer: Marker,
        human: Marker,
        rng: &mut ChaCha20Rng,
    ) -> Option<Position> {
        match self {
            Tier::Offense => board.find_two_in_a_row(computer),
            Tier::Defense => board.find_two_in_a_row(human),
            Tier::Center => board.center_is_empty().then_some(Position::Center),
            Tier::Random => board.unmarked_positions().choose(rng).copied(),
        }
    }
}

/// A computer move together with the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMove {
    /// Where the computer plays.
    pub position: Position,
    /// Which rule chose it.
    pub tier: Tier,
}

/// The computer's tier list plus its source of randomness.
#[derive(Debug, Clone)]
pub struct ComputerStrategy {
    center_priority: bool,
    rng: ChaCha20Rng,
}

impl ComputerStrategy {
    /// Creates a strategy; `seed` makes the random tier reproducible.
    #[instrument]
    pub fn new(center_priority: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self {
            center_priority,
            rng,
        }
    }

    /// Whether the center tier is consulted.
    pub fn center_priority(&self) -> bool {
        self.center_priority
    }

    /// Tiers this strategy consults, in order.
    pub fn tiers(&self) -> impl Iterator<Item = Tier> + use<> {
        consulted_tiers(self.center_priority)
    }

    /// Random source shared with player construction.
    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }

    /// Picks the computer's move. Returns `None` only on a full board.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, computer: Marker, human: Marker) -> Option<ComputerMove> {
        let rng = &mut self.rng;
        let chosen = consulted_tiers(self.center_priority).find_map(|tier| {
            tier.propose(board, computer, human, rng)
                .map(|position| ComputerMove { position, tier })
        });
        if let Some(mv) = chosen {
            debug!(position = mv.position.id(), tier = %mv.tier, "Computer chose move");
        }
        chosen
    }
}

/// Tiers in evaluation order, skipping the center tier when disabled.
fn consulted_tiers(center_priority: bool) -> impl Iterator<Item = Tier> {
    Tier::ORDER
        .into_iter()
        .filter(move |tier| *tier != Tier::Center || center_priority)
}
