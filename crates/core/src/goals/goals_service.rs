use crate::errors::Result;
use crate::goals::goals_model::{DepositWithGoal, Goal, NewDeposit, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        self.goal_repo.get_goal_by_id(goal_id)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn record_deposit(&self, goal_id: &str, deposit: NewDeposit) -> Result<Option<Goal>> {
        self.goal_repo.add_deposit(goal_id, deposit).await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        self.goal_repo.delete_goal(goal_id).await
    }

    fn get_all_deposits(&self) -> Result<Vec<DepositWithGoal>> {
        let goals = self.goal_repo.load_goals()?;

        let mut all_deposits: Vec<DepositWithGoal> = goals
            .iter()
            .flat_map(|goal| {
                goal.deposits.iter().map(|d| DepositWithGoal {
                    amount: d.amount,
                    timestamp: d.timestamp,
                    tx_id: d.tx_id.clone(),
                    goal_id: goal.id.clone(),
                    goal_name: goal.name.clone(),
                })
            })
            .collect();

        // Full scan per call; collection stays client-local small.
        all_deposits.sort_by_key(|d| d.timestamp);
        Ok(all_deposits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct InMemoryGoalRepo {
        goals: Mutex<Vec<Goal>>,
    }

    impl InMemoryGoalRepo {
        fn with_goals(goals: Vec<Goal>) -> Self {
            InMemoryGoalRepo {
                goals: Mutex::new(goals),
            }
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for InMemoryGoalRepo {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        fn get_goal_by_id(&self, goal_id: &str) -> Result<Option<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == goal_id)
                .cloned())
        }

        async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
            let goal = Goal {
                id: format!("local_test_{}", self.goals.lock().unwrap().len()),
                name: new_goal.name,
                app_id: new_goal.app_id,
                created_at: Utc::now(),
                deposits: vec![],
            };
            self.goals.lock().unwrap().push(goal.clone());
            Ok(goal)
        }

        async fn add_deposit(&self, goal_id: &str, deposit: NewDeposit) -> Result<Option<Goal>> {
            let mut goals = self.goals.lock().unwrap();
            match goals.iter_mut().find(|g| g.id == goal_id) {
                Some(goal) => {
                    goal.deposits.push(Deposit {
                        amount: deposit.amount,
                        timestamp: Utc::now(),
                        tx_id: deposit.tx_id,
                    });
                    Ok(Some(goal.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete_goal(&self, goal_id: &str) -> Result<()> {
            self.goals.lock().unwrap().retain(|g| g.id != goal_id);
            Ok(())
        }
    }

    use crate::goals::goals_model::Deposit;

    fn goal_with_deposits(id: &str, name: &str, offsets_minutes: &[i64]) -> Goal {
        let base = Utc::now();
        Goal {
            id: id.to_string(),
            name: name.to_string(),
            app_id: 0,
            created_at: base,
            deposits: offsets_minutes
                .iter()
                .map(|m| Deposit {
                    amount: dec!(1),
                    timestamp: base + Duration::minutes(*m),
                    tx_id: format!("tx_{m}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_get_all_deposits_sorted_across_goals() {
        let repo = Arc::new(InMemoryGoalRepo::with_goals(vec![
            goal_with_deposits("g1", "Laptop", &[10, 40]),
            goal_with_deposits("g2", "Trip", &[5, 25, 60]),
        ]));
        let service = GoalService::new(repo);

        let deposits = service.get_all_deposits().unwrap();
        assert_eq!(deposits.len(), 5);
        for pair in deposits.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        assert_eq!(deposits[0].goal_name, "Trip");
        assert_eq!(deposits[1].goal_name, "Laptop");
    }

    #[test]
    fn test_get_all_deposits_empty() {
        let repo = Arc::new(InMemoryGoalRepo::with_goals(vec![]));
        let service = GoalService::new(repo);
        assert!(service.get_all_deposits().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_deposit_unknown_goal_is_none() {
        let repo = Arc::new(InMemoryGoalRepo::with_goals(vec![]));
        let service = GoalService::new(repo);
        let result = service
            .record_deposit(
                "missing",
                NewDeposit {
                    amount: dec!(5),
                    tx_id: "tx".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
