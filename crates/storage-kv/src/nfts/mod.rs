//! Key-value storage implementation for the NFT mint cache.

mod repository;

pub use repository::NftRepository;
