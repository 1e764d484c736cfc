use algosave_core::constants::GOAL_ID_SUFFIX_LEN;
use algosave_core::goals::{Deposit, Goal, GoalRepositoryTrait, NewDeposit, NewGoal};
use algosave_core::Result;

use crate::backend::KvBackend;
use crate::collection_key;
use crate::collections::{read_collection, write_collection};
use async_trait::async_trait;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;

pub struct GoalRepository {
    backend: Arc<dyn KvBackend>,
    key: String,
}

impl GoalRepository {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        GoalRepository {
            backend,
            key: collection_key("goals"),
        }
    }

    fn read(&self) -> Result<Vec<Goal>> {
        read_collection(self.backend.as_ref(), &self.key)
    }

    fn write(&self, goals: &[Goal]) -> Result<()> {
        write_collection(self.backend.as_ref(), &self.key, &goals)
    }

    /// Locally generated id: unix millis plus a random lowercase suffix.
    fn generate_goal_id() -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GOAL_ID_SUFFIX_LEN)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        format!("local_{}_{}", Utc::now().timestamp_millis(), suffix)
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        self.read()
    }

    fn get_goal_by_id(&self, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self.read()?.into_iter().find(|g| g.id == goal_id))
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let mut goals = self.read()?;
        let goal = Goal {
            id: Self::generate_goal_id(),
            name: new_goal.name,
            app_id: new_goal.app_id,
            created_at: Utc::now(),
            deposits: vec![],
        };
        goals.push(goal.clone());
        self.write(&goals)?;
        Ok(goal)
    }

    async fn add_deposit(&self, goal_id: &str, deposit: NewDeposit) -> Result<Option<Goal>> {
        let mut goals = self.read()?;
        let goal = match goals.iter_mut().find(|g| g.id == goal_id) {
            Some(goal) => goal,
            // unknown goal: nothing is written back
            None => return Ok(None),
        };

        goal.deposits.push(Deposit {
            amount: deposit.amount,
            timestamp: Utc::now(),
            tx_id: deposit.tx_id,
        });
        let updated = goal.clone();
        self.write(&goals)?;
        Ok(Some(updated))
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let mut goals = self.read()?;
        goals.retain(|g| g.id != goal_id);
        self.write(&goals)
    }
}
