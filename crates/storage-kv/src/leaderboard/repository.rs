use algosave_core::leaderboard::{LeaderboardEntry, LeaderboardRepositoryTrait};
use algosave_core::Result;

use crate::backend::KvBackend;
use crate::collection_key;
use crate::collections::{read_collection, write_collection};
use async_trait::async_trait;
use std::sync::Arc;

pub struct LeaderboardRepository {
    backend: Arc<dyn KvBackend>,
    key: String,
}

impl LeaderboardRepository {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        LeaderboardRepository {
            backend,
            key: collection_key("leaderboard"),
        }
    }
}

#[async_trait]
impl LeaderboardRepositoryTrait for LeaderboardRepository {
    fn load_entries(&self) -> Result<Vec<LeaderboardEntry>> {
        read_collection(self.backend.as_ref(), &self.key)
    }

    async fn replace_entries(&self, entries: Vec<LeaderboardEntry>) -> Result<()> {
        write_collection(self.backend.as_ref(), &self.key, &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryKvBackend;
    use algosave_core::leaderboard::Badge;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_replace_then_load() {
        let repo = LeaderboardRepository::new(Arc::new(MemoryKvBackend::new()));
        assert!(repo.load_entries().unwrap().is_empty());

        let entries = vec![LeaderboardEntry {
            address: "ADDR1".to_string(),
            nickname: "addr1".to_string(),
            total_saved: dec!(12),
            completed_goals: 1,
            active_goals: 2,
            score: dec!(180),
            rank: 1,
            badge: Badge::Gold,
        }];
        repo.replace_entries(entries.clone()).await.unwrap();
        assert_eq!(repo.load_entries().unwrap(), entries);
    }
}
