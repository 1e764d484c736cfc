//! AlgoSave Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for AlgoSave, a client-side
//! micro-savings tracker whose goals mirror on-chain contract instances.
//! It is storage-agnostic and defines traits that are implemented by the
//! `storage-kv` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod groups;
pub mod leaderboard;
pub mod nfts;
pub mod profiles;
pub mod sourced;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the degradation-aware result wrapper
pub use sourced::Sourced;
