//! Player identities.

use super::Marker;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Names the computer opponent may go by.
pub const COMPUTER_NAMES: [&str; 3] = ["R2D2", "C3PO", "Hal"];

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The scripted opponent.
    Computer,
}

/// A named participant holding one marker.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker currently assigned.
    #[getter(skip)]
    marker: Marker,
}

impl Player {
    /// Creates the human player.
    #[instrument(skip(name))]
    pub fn human(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Creates the computer player with a name drawn from [`COMPUTER_NAMES`].
    #[instrument(skip(rng))]
    pub fn computer<R: Rng>(marker: Marker, rng: &mut R) -> Self {
        let name = COMPUTER_NAMES.choose(rng).copied().unwrap_or(COMPUTER_NAMES[0]);
        Self {
            name: name.to_string(),
            marker,
        }
    }

    /// Marker currently assigned.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Reassigns the marker; only the match controller does this, between rounds.
    pub(crate) fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }
}
