//! Key-value backends holding one serialized blob per collection.
//!
//! The backend is the injection seam that keeps repositories testable
//! without a real storage target: production wires `FileKvBackend`, tests
//! wire `MemoryKvBackend`.

use crate::errors::KvError;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A minimal get/put store over named collections.
///
/// No transactions and no locking across calls: two writers interleaving
/// read-modify-write cycles race at blob granularity and the last `put`
/// wins.
pub trait KvBackend: Send + Sync {
    /// The blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    /// Replace the blob stored under `key`.
    fn put(&self, key: &str, payload: &str) -> Result<(), KvError>;
    /// Remove the blob stored under `key`. Absent keys are a no-op.
    fn remove(&self, key: &str) -> Result<(), KvError>;
}

/// File-backed store: one `<key>.json` file per collection under a data
/// directory. Writes go through a sibling temp file and a rename.
pub struct FileKvBackend {
    data_dir: PathBuf,
}

impl FileKvBackend {
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, KvError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|source| KvError::Io {
            key: data_dir.display().to_string(),
            source,
        })?;
        Ok(FileKvBackend { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl KvBackend for FileKvBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(KvError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&self, key: &str, payload: &str) -> Result<(), KvError> {
        let path = self.path_for(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, payload).map_err(|source| KvError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| KvError::Io {
            key: key.to_string(),
            source,
        })?;
        debug!("wrote {} bytes to {}", payload.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(KvError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// In-memory store used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryKvBackend {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryKvBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryKvBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, payload: &str) -> Result<(), KvError> {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        self.blobs.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryKvBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);
        backend.put("k", "[1,2]").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("[1,2]"));
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
        // removing again is a no-op
        backend.remove("k").unwrap();
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileKvBackend::new(dir.path()).unwrap();

        assert_eq!(backend.get("algosave_goals").unwrap(), None);
        backend.put("algosave_goals", "[]").unwrap();
        assert_eq!(
            backend.get("algosave_goals").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("algosave_goals.json").exists());

        backend.remove("algosave_goals").unwrap();
        assert_eq!(backend.get("algosave_goals").unwrap(), None);
    }

    #[test]
    fn test_file_backend_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileKvBackend::new(dir.path()).unwrap();
        backend.put("k", "old").unwrap();
        backend.put("k", "new").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("new"));
    }
}
