use crate::errors::Result;
use async_trait::async_trait;

/// Trait for profile repository operations: a flat address → nickname map.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_nickname(&self, address: &str) -> Result<Option<String>>;
    async fn set_nickname(&self, address: &str, nickname: &str) -> Result<()>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// The stored nickname for an address, or the shortened-address
    /// display fallback when none is set.
    fn nickname_for(&self, address: &str) -> Result<String>;
    async fn set_nickname(&self, address: &str, nickname: &str) -> Result<()>;
}
