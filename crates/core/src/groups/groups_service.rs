use crate::constants::INVITE_CODE_LEN;
use crate::errors::Result;
use crate::groups::groups_model::{GroupMember, NewGroup, SavingsGroup};
use crate::groups::groups_traits::{GroupRepositoryTrait, GroupServiceTrait};
use crate::profiles::ProfileServiceTrait;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct GroupService {
    group_repo: Arc<dyn GroupRepositoryTrait>,
    profile_service: Arc<dyn ProfileServiceTrait>,
}

impl GroupService {
    pub fn new(
        group_repo: Arc<dyn GroupRepositoryTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
    ) -> Self {
        GroupService {
            group_repo,
            profile_service,
        }
    }

    /// Derive the invite code from a random identifier: uuid hex truncated
    /// to 6 characters, uppercased. Codes are not checked for collisions
    /// against existing groups.
    fn generate_invite_code(id: &Uuid) -> String {
        id.simple().to_string()[..INVITE_CODE_LEN].to_uppercase()
    }
}

#[async_trait]
impl GroupServiceTrait for GroupService {
    fn get_groups(&self) -> Result<Vec<SavingsGroup>> {
        self.group_repo.load_groups()
    }

    fn get_group(&self, group_id: &str) -> Result<Option<SavingsGroup>> {
        self.group_repo.get_group_by_id(group_id)
    }

    fn get_group_by_invite_code(&self, code: &str) -> Result<Option<SavingsGroup>> {
        self.group_repo.get_group_by_invite_code(code)
    }

    async fn create_group(&self, new_group: NewGroup) -> Result<SavingsGroup> {
        let uuid = Uuid::new_v4();
        let creator_nickname = self.profile_service.nickname_for(&new_group.created_by)?;

        let group = SavingsGroup {
            id: format!("group_{uuid}"),
            name: new_group.name,
            description: new_group.description,
            target_amount: new_group.target_amount,
            deadline: new_group.deadline,
            created_at: Utc::now(),
            created_by: new_group.created_by.clone(),
            members: vec![GroupMember::joining_now(
                new_group.created_by,
                creator_nickname,
            )],
            invite_code: Self::generate_invite_code(&uuid),
        };

        self.group_repo.insert_new_group(group).await
    }

    async fn join_group(&self, group_id: &str, address: &str) -> Result<Option<SavingsGroup>> {
        let nickname = self.profile_service.nickname_for(address)?;
        let member = GroupMember::joining_now(address.to_string(), nickname);
        self.group_repo.join_group(group_id, member).await
    }

    async fn record_contribution(
        &self,
        group_id: &str,
        address: &str,
        amount: Decimal,
    ) -> Result<Option<SavingsGroup>> {
        self.group_repo
            .add_contribution(group_id, address, amount)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileService;
    use crate::profiles::ProfileRepositoryTrait;
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct InMemoryGroupRepo {
        groups: Mutex<Vec<SavingsGroup>>,
    }

    impl InMemoryGroupRepo {
        fn new() -> Self {
            InMemoryGroupRepo {
                groups: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl GroupRepositoryTrait for InMemoryGroupRepo {
        fn load_groups(&self) -> Result<Vec<SavingsGroup>> {
            Ok(self.groups.lock().unwrap().clone())
        }

        fn get_group_by_id(&self, group_id: &str) -> Result<Option<SavingsGroup>> {
            Ok(self
                .groups
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == group_id)
                .cloned())
        }

        fn get_group_by_invite_code(&self, code: &str) -> Result<Option<SavingsGroup>> {
            Ok(self
                .groups
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.invite_code == code)
                .cloned())
        }

        async fn insert_new_group(&self, group: SavingsGroup) -> Result<SavingsGroup> {
            self.groups.lock().unwrap().push(group.clone());
            Ok(group)
        }

        async fn join_group(
            &self,
            group_id: &str,
            member: GroupMember,
        ) -> Result<Option<SavingsGroup>> {
            let mut groups = self.groups.lock().unwrap();
            match groups.iter_mut().find(|g| g.id == group_id) {
                Some(group) => {
                    if !group.members.iter().any(|m| m.address == member.address) {
                        group.members.push(member);
                    }
                    Ok(Some(group.clone()))
                }
                None => Ok(None),
            }
        }

        async fn add_contribution(
            &self,
            group_id: &str,
            address: &str,
            amount: Decimal,
        ) -> Result<Option<SavingsGroup>> {
            let mut groups = self.groups.lock().unwrap();
            let group = match groups.iter_mut().find(|g| g.id == group_id) {
                Some(g) => g,
                None => return Ok(None),
            };
            match group.members.iter_mut().find(|m| m.address == address) {
                Some(member) => {
                    member.contributed += amount;
                    Ok(Some(group.clone()))
                }
                None => Ok(None),
            }
        }
    }

    struct EmptyProfileRepo;

    #[async_trait]
    impl ProfileRepositoryTrait for EmptyProfileRepo {
        fn get_nickname(&self, _address: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn set_nickname(&self, _address: &str, _nickname: &str) -> Result<()> {
            Ok(())
        }
    }

    fn make_service() -> GroupService {
        GroupService::new(
            Arc::new(InMemoryGroupRepo::new()),
            Arc::new(ProfileService::new(Arc::new(EmptyProfileRepo))),
        )
    }

    fn trip_group() -> NewGroup {
        NewGroup {
            name: "Trip".to_string(),
            description: "Goa in December".to_string(),
            target_amount: dec!(100),
            deadline: Utc::now() + Duration::days(120),
            created_by: "ADDR1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_group_seeds_creator() {
        let service = make_service();
        let group = service.create_group(trip_group()).await.unwrap();

        assert!(group.id.starts_with("group_"));
        assert_eq!(group.members.len(), 1);
        assert_eq!(group.members[0].address, "ADDR1");
        assert_eq!(group.members[0].contributed, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_invite_code_shape_and_round_trip() {
        let service = make_service();
        let group = service.create_group(trip_group()).await.unwrap();

        assert_eq!(group.invite_code.len(), INVITE_CODE_LEN);
        assert!(group
            .invite_code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let found = service
            .get_group_by_invite_code(&group.invite_code)
            .unwrap()
            .unwrap();
        assert_eq!(found.id, group.id);
    }

    #[tokio::test]
    async fn test_join_group_is_idempotent() {
        let service = make_service();
        let group = service.create_group(trip_group()).await.unwrap();

        let joined = service.join_group(&group.id, "ADDR2").await.unwrap().unwrap();
        assert_eq!(joined.members.len(), 2);

        let rejoined = service.join_group(&group.id, "ADDR2").await.unwrap().unwrap();
        assert_eq!(rejoined.members.len(), 2);
    }

    #[tokio::test]
    async fn test_contribution_scenario() {
        let service = make_service();
        let group = service.create_group(trip_group()).await.unwrap();

        service
            .record_contribution(&group.id, "ADDR1", dec!(25))
            .await
            .unwrap();

        let reloaded = service.get_group(&group.id).unwrap().unwrap();
        assert_eq!(reloaded.members[0].contributed, dec!(25));
    }

    #[tokio::test]
    async fn test_join_unknown_group_is_none() {
        let service = make_service();
        assert!(service
            .join_group("group_missing", "ADDR2")
            .await
            .unwrap()
            .is_none());
    }
}
