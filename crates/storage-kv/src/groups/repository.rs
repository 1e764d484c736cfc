use algosave_core::groups::{GroupMember, GroupRepositoryTrait, SavingsGroup};
use algosave_core::Result;

use crate::backend::KvBackend;
use crate::collection_key;
use crate::collections::{read_collection, write_collection};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct GroupRepository {
    backend: Arc<dyn KvBackend>,
    key: String,
}

impl GroupRepository {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        GroupRepository {
            backend,
            key: collection_key("groups"),
        }
    }

    fn read(&self) -> Result<Vec<SavingsGroup>> {
        read_collection(self.backend.as_ref(), &self.key)
    }

    fn write(&self, groups: &[SavingsGroup]) -> Result<()> {
        write_collection(self.backend.as_ref(), &self.key, &groups)
    }
}

#[async_trait]
impl GroupRepositoryTrait for GroupRepository {
    fn load_groups(&self) -> Result<Vec<SavingsGroup>> {
        self.read()
    }

    fn get_group_by_id(&self, group_id: &str) -> Result<Option<SavingsGroup>> {
        Ok(self.read()?.into_iter().find(|g| g.id == group_id))
    }

    fn get_group_by_invite_code(&self, code: &str) -> Result<Option<SavingsGroup>> {
        Ok(self.read()?.into_iter().find(|g| g.invite_code == code))
    }

    async fn insert_new_group(&self, group: SavingsGroup) -> Result<SavingsGroup> {
        let mut groups = self.read()?;
        groups.push(group.clone());
        self.write(&groups)?;
        Ok(group)
    }

    async fn join_group(
        &self,
        group_id: &str,
        member: GroupMember,
    ) -> Result<Option<SavingsGroup>> {
        let mut groups = self.read()?;
        let group = match groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => group,
            None => return Ok(None),
        };

        if group.members.iter().any(|m| m.address == member.address) {
            // already a member: no write
            return Ok(Some(group.clone()));
        }

        group.members.push(member);
        let updated = group.clone();
        self.write(&groups)?;
        Ok(Some(updated))
    }

    async fn add_contribution(
        &self,
        group_id: &str,
        address: &str,
        amount: Decimal,
    ) -> Result<Option<SavingsGroup>> {
        let mut groups = self.read()?;
        let group = match groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => group,
            None => return Ok(None),
        };
        let member = match group.members.iter_mut().find(|m| m.address == address) {
            Some(member) => member,
            None => return Ok(None),
        };

        member.contributed += amount;
        let updated = group.clone();
        self.write(&groups)?;
        Ok(Some(updated))
    }
}
