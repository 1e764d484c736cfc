use algosave_core::profiles::ProfileRepositoryTrait;
use algosave_core::Result;

use crate::backend::KvBackend;
use crate::collection_key;
use crate::collections::{read_collection, write_collection};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Nicknames stored as a JSON map keyed by wallet address.
pub struct ProfileRepository {
    backend: Arc<dyn KvBackend>,
    key: String,
}

impl ProfileRepository {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        ProfileRepository {
            backend,
            key: collection_key("profile"),
        }
    }

    fn read(&self) -> Result<HashMap<String, String>> {
        read_collection(self.backend.as_ref(), &self.key)
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get_nickname(&self, address: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(address))
    }

    async fn set_nickname(&self, address: &str, nickname: &str) -> Result<()> {
        let mut profiles = self.read()?;
        profiles.insert(address.to_string(), nickname.to_string());
        write_collection(self.backend.as_ref(), &self.key, &profiles)
    }
}
