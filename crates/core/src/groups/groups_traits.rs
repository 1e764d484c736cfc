use crate::errors::Result;
use crate::groups::groups_model::{GroupMember, NewGroup, SavingsGroup};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for group repository operations.
#[async_trait]
pub trait GroupRepositoryTrait: Send + Sync {
    fn load_groups(&self) -> Result<Vec<SavingsGroup>>;
    fn get_group_by_id(&self, group_id: &str) -> Result<Option<SavingsGroup>>;
    fn get_group_by_invite_code(&self, code: &str) -> Result<Option<SavingsGroup>>;
    async fn insert_new_group(&self, group: SavingsGroup) -> Result<SavingsGroup>;
    /// Add a member to a group. Idempotent: if the address is already a
    /// member, the group is returned unchanged. `Ok(None)` when the group
    /// does not exist.
    async fn join_group(&self, group_id: &str, member: GroupMember)
        -> Result<Option<SavingsGroup>>;
    /// Additively bump a member's contribution. `Ok(None)` when the group or
    /// the member does not exist.
    async fn add_contribution(
        &self,
        group_id: &str,
        address: &str,
        amount: Decimal,
    ) -> Result<Option<SavingsGroup>>;
}

/// Trait for group service operations.
#[async_trait]
pub trait GroupServiceTrait: Send + Sync {
    fn get_groups(&self) -> Result<Vec<SavingsGroup>>;
    fn get_group(&self, group_id: &str) -> Result<Option<SavingsGroup>>;
    fn get_group_by_invite_code(&self, code: &str) -> Result<Option<SavingsGroup>>;
    async fn create_group(&self, new_group: NewGroup) -> Result<SavingsGroup>;
    async fn join_group(&self, group_id: &str, address: &str) -> Result<Option<SavingsGroup>>;
    async fn record_contribution(
        &self,
        group_id: &str,
        address: &str,
        amount: Decimal,
    ) -> Result<Option<SavingsGroup>>;
}
