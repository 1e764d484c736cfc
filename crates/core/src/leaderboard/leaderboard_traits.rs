use crate::errors::Result;
use crate::leaderboard::leaderboard_model::{LeaderboardEntry, LeaderboardInput};
use async_trait::async_trait;

/// Trait for leaderboard repository operations.
///
/// The repository is a dumb blob: re-ranking happens in the service, which
/// swaps the whole collection on every write.
#[async_trait]
pub trait LeaderboardRepositoryTrait: Send + Sync {
    fn load_entries(&self) -> Result<Vec<LeaderboardEntry>>;
    async fn replace_entries(&self, entries: Vec<LeaderboardEntry>) -> Result<()>;
}

/// Trait for leaderboard service operations.
#[async_trait]
pub trait LeaderboardServiceTrait: Send + Sync {
    fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;
    /// Replace-or-insert by address, then recompute rank and badge for the
    /// entire collection.
    async fn upsert_entry(&self, input: LeaderboardInput) -> Result<Vec<LeaderboardEntry>>;
}
