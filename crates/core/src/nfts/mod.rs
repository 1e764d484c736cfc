//! Goal achievement NFT module - write-once cache of mint results.

mod nfts_model;
mod nfts_service;
mod nfts_traits;

pub use nfts_model::GoalNft;
pub use nfts_service::NftService;
pub use nfts_traits::{NftRepositoryTrait, NftServiceTrait};
