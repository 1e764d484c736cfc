use crate::errors::Result;
use crate::leaderboard::leaderboard_model::{LeaderboardEntry, LeaderboardInput, ScoringPolicy};
use crate::leaderboard::leaderboard_traits::{
    LeaderboardRepositoryTrait, LeaderboardServiceTrait,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Sort descending by score and assign `rank = 1..N` plus badges.
///
/// A full O(n log n) resort per write. The collection is client-local and
/// small; a shared multi-writer leaderboard would need an incremental
/// structure instead.
pub fn rank_entries(entries: &mut [LeaderboardEntry], policy: &ScoringPolicy) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
        entry.badge = policy.badge_for_rank(entry.rank);
    }
}

pub struct LeaderboardService {
    leaderboard_repo: Arc<dyn LeaderboardRepositoryTrait>,
    policy: ScoringPolicy,
}

impl LeaderboardService {
    pub fn new(leaderboard_repo: Arc<dyn LeaderboardRepositoryTrait>, policy: ScoringPolicy) -> Self {
        LeaderboardService {
            leaderboard_repo,
            policy,
        }
    }
}

#[async_trait]
impl LeaderboardServiceTrait for LeaderboardService {
    fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.leaderboard_repo.load_entries()
    }

    async fn upsert_entry(&self, input: LeaderboardInput) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.leaderboard_repo.load_entries()?;

        let entry = LeaderboardEntry {
            score: self.policy.score(&input),
            address: input.address,
            nickname: input.nickname,
            total_saved: input.total_saved,
            completed_goals: input.completed_goals,
            active_goals: input.active_goals,
            rank: 0,
            badge: Default::default(),
        };

        match entries.iter_mut().find(|e| e.address == entry.address) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }

        rank_entries(&mut entries, &self.policy);
        self.leaderboard_repo.replace_entries(entries.clone()).await?;
        Ok(entries)
    }
}
