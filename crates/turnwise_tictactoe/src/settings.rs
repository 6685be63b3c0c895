//! Per-match configuration.

use super::Marker;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Round wins needed to take the match.
pub const DEFAULT_TARGET_SCORE: u32 = 5;

/// Settings fixed for the lifetime of one match.
///
/// Each controller carries its own copy, so matches never share marker or
/// scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct MatchSettings {
    /// Round wins needed to take the match.
    #[serde(default = "default_target_score")]
    pub target_score: u32,
    /// Whoever holds this marker moves first in every round. When absent, the
    /// marker the human starts the match with.
    #[serde(default)]
    #[setters(strip_option)]
    pub first_marker: Option<Marker>,
    /// Whether the computer takes the center before falling back to random.
    #[serde(default = "default_center_priority")]
    pub center_priority: bool,
    /// Seed for the computer's random choices; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    pub seed: Option<u64>,
}

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

fn default_center_priority() -> bool {
    true
}

impl MatchSettings {
    /// Creates settings with the classic defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            target_score: default_target_score(),
            first_marker: None,
            center_priority: default_center_priority(),
            seed: None,
        }
    }
}
