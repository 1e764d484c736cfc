//! Leaderboard module - derived per-address ranking records.

mod leaderboard_model;
mod leaderboard_service;
mod leaderboard_traits;

pub use leaderboard_model::{Badge, LeaderboardEntry, LeaderboardInput, ScoringPolicy};
pub use leaderboard_service::{rank_entries, LeaderboardService};
pub use leaderboard_traits::{LeaderboardRepositoryTrait, LeaderboardServiceTrait};
