//! Collection read/write helpers shared by every repository.
//!
//! Reads never fail: an absent or unparsable blob degrades to the empty
//! collection (with a warning when a blob existed but did not parse).
//! Writes propagate backend failures so callers can tell "saved" from
//! "dropped".

use crate::backend::KvBackend;
use algosave_core::errors::Result;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Deserialize the collection stored under `key`, or its `Default` when the
/// blob is absent or corrupt.
pub fn read_collection<T>(backend: &dyn KvBackend, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let payload = match backend.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Ok(T::default()),
        Err(e) => {
            warn!("collection '{key}' unreadable, treating as empty: {e}");
            return Ok(T::default());
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("collection '{key}' corrupt, treating as empty: {e}");
            Ok(T::default())
        }
    }
}

/// Serialize and persist the whole collection under `key`.
pub fn write_collection<T>(backend: &dyn KvBackend, key: &str, collection: &T) -> Result<()>
where
    T: Serialize,
{
    let payload =
        serde_json::to_string(collection).map_err(|source| crate::errors::KvError::Serde {
            key: key.to_string(),
            source,
        })?;
    backend.put(key, &payload)?;
    Ok(())
}
