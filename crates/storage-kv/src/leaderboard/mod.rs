//! Key-value storage implementation for the leaderboard.

mod repository;

pub use repository::LeaderboardRepository;
