use crate::errors::Result;
use crate::profiles::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::utils::short_address;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepositoryTrait>) -> Self {
        ProfileService { profile_repo }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    fn nickname_for(&self, address: &str) -> Result<String> {
        match self.profile_repo.get_nickname(address)? {
            Some(nickname) if !nickname.is_empty() => Ok(nickname),
            _ => Ok(short_address(address)),
        }
    }

    async fn set_nickname(&self, address: &str, nickname: &str) -> Result<()> {
        self.profile_repo.set_nickname(address, nickname).await
    }
}
