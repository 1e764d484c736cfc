//! Leaderboard domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Badge tier assigned by rank position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
    #[default]
    Starter,
}

/// A per-address derived ranking record.
///
/// `score`, `rank`, and `badge` are recomputed from the whole collection on
/// every write; they are never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub address: String,
    pub nickname: String,
    pub total_saved: Decimal,
    pub completed_goals: u32,
    pub active_goals: u32,
    pub score: Decimal,
    pub rank: u32,
    pub badge: Badge,
}

/// Input for an upsert: everything the caller knows, minus the derived
/// `score`/`rank`/`badge` fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardInput {
    pub address: String,
    pub nickname: String,
    pub total_saved: Decimal,
    pub completed_goals: u32,
    pub active_goals: u32,
}

/// Weights of the leaderboard score formula.
///
/// The formula is a business rule, not an invariant; it is injected into the
/// service so deployments can tune it without touching ranking logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPolicy {
    pub saved_weight: Decimal,
    pub completed_weight: Decimal,
    pub active_weight: Decimal,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy {
            saved_weight: Decimal::from(10),
            completed_weight: Decimal::from(50),
            active_weight: Decimal::from(5),
        }
    }
}

impl ScoringPolicy {
    /// `saved_weight×total_saved + completed_weight×completed + active_weight×active`
    pub fn score(&self, input: &LeaderboardInput) -> Decimal {
        self.saved_weight * input.total_saved
            + self.completed_weight * Decimal::from(input.completed_goals)
            + self.active_weight * Decimal::from(input.active_goals)
    }

    /// Badge for a 1-based rank position.
    pub fn badge_for_rank(&self, rank: u32) -> Badge {
        match rank {
            1 => Badge::Gold,
            2 => Badge::Silver,
            3 => Badge::Bronze,
            _ => Badge::Starter,
        }
    }
}
