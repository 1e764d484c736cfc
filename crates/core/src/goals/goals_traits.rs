use crate::errors::Result;
use crate::goals::goals_model::{DepositWithGoal, Goal, NewDeposit, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal_by_id(&self, goal_id: &str) -> Result<Option<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Append a deposit to a goal. Returns `Ok(None)` when the goal does not
    /// exist; the stored collection is left untouched in that case.
    async fn add_deposit(&self, goal_id: &str, deposit: NewDeposit) -> Result<Option<Goal>>;
    /// Idempotent: deleting an unknown id is a no-op.
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn record_deposit(&self, goal_id: &str, deposit: NewDeposit) -> Result<Option<Goal>>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
    /// Every goal's deposit log flattened, sorted ascending by timestamp.
    fn get_all_deposits(&self) -> Result<Vec<DepositWithGoal>>;
}
