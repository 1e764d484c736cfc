use crate::errors::Result;
use crate::nfts::nfts_model::GoalNft;
use crate::nfts::nfts_traits::{NftRepositoryTrait, NftServiceTrait};
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

pub struct NftService {
    nft_repo: Arc<dyn NftRepositoryTrait>,
}

impl NftService {
    pub fn new(nft_repo: Arc<dyn NftRepositoryTrait>) -> Self {
        NftService { nft_repo }
    }
}

#[async_trait]
impl NftServiceTrait for NftService {
    fn get_minted(&self, goal_id: &str) -> Result<Option<GoalNft>> {
        self.nft_repo.get_nft(goal_id)
    }

    async fn record_mint(&self, goal_id: &str, nft: GoalNft) -> Result<GoalNft> {
        if let Some(existing) = self.nft_repo.get_nft(goal_id)? {
            warn!(
                "goal {} already has minted asset {}, keeping existing record",
                goal_id, existing.asset_id
            );
            return Ok(existing);
        }
        self.nft_repo.save_nft(goal_id, nft.clone()).await?;
        Ok(nft)
    }
}
