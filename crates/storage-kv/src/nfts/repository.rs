use algosave_core::nfts::{GoalNft, NftRepositoryTrait};
use algosave_core::Result;

use crate::backend::KvBackend;
use crate::collection_key;
use crate::collections::{read_collection, write_collection};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Mint records stored as a JSON map keyed by goal id.
pub struct NftRepository {
    backend: Arc<dyn KvBackend>,
    key: String,
}

impl NftRepository {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        NftRepository {
            backend,
            key: collection_key("nfts"),
        }
    }

    fn read(&self) -> Result<HashMap<String, GoalNft>> {
        read_collection(self.backend.as_ref(), &self.key)
    }
}

#[async_trait]
impl NftRepositoryTrait for NftRepository {
    fn get_nft(&self, goal_id: &str) -> Result<Option<GoalNft>> {
        Ok(self.read()?.remove(goal_id))
    }

    async fn save_nft(&self, goal_id: &str, nft: GoalNft) -> Result<()> {
        let mut nfts = self.read()?;
        nfts.insert(goal_id.to_string(), nft);
        write_collection(self.backend.as_ref(), &self.key, &nfts)
    }
}
