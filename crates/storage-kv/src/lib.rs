//! JSON blob-per-collection storage implementation for AlgoSave.
//!
//! This crate is the local record store: each logical collection (goals,
//! nfts, groups, profile, leaderboard) is one JSON-serialized blob under its
//! own namespaced key in a key-value backend. It implements the repository
//! traits defined in `algosave-core` and contains:
//! - The `KvBackend` abstraction plus file-backed and in-memory backends
//! - Collection read/write helpers with the never-throw read contract
//! - Repository implementations for all domain entities
//!
//! # Architecture
//!
//! Every mutation is read-whole-collection → mutate → write-whole-collection,
//! executed synchronously within one call. There is no cross-call atomicity:
//! concurrent writers race at blob granularity and the last writer wins.
//!
//! ```text
//! core (domain traits)
//!        │
//!        ▼
//!  storage-kv (this crate)
//!        │
//!        ▼
//!    KvBackend (file / memory)
//! ```

pub mod backend;
pub mod collections;
pub mod errors;

// Repository implementations
pub mod goals;
pub mod groups;
pub mod leaderboard;
pub mod nfts;
pub mod profiles;

// Re-export backend types
pub use backend::{FileKvBackend, KvBackend, MemoryKvBackend};

// Re-export storage errors
pub use errors::KvError;

// Re-export from algosave-core for convenience
pub use algosave_core::errors::{Error, Result, StoreError};

/// Namespace prefix shared by every collection key.
pub const KEY_PREFIX: &str = "algosave";

/// Build a namespaced storage key for a collection.
pub fn collection_key(name: &str) -> String {
    format!("{KEY_PREFIX}_{name}")
}
