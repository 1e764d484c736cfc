use crate::errors::Result;
use crate::nfts::nfts_model::GoalNft;
use async_trait::async_trait;

/// Trait for NFT cache repository operations: a goal id → mint record map.
#[async_trait]
pub trait NftRepositoryTrait: Send + Sync {
    fn get_nft(&self, goal_id: &str) -> Result<Option<GoalNft>>;
    async fn save_nft(&self, goal_id: &str, nft: GoalNft) -> Result<()>;
}

/// Trait for NFT cache service operations.
#[async_trait]
pub trait NftServiceTrait: Send + Sync {
    fn get_minted(&self, goal_id: &str) -> Result<Option<GoalNft>>;
    /// Cache a mint result. Write-once: if a record already exists for the
    /// goal it is kept and returned unchanged.
    async fn record_mint(&self, goal_id: &str, nft: GoalNft) -> Result<GoalNft>;
}
