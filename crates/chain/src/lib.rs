//! Read-only Algorand node access for AlgoSave.
//!
//! The goal contract's global state is the authoritative source of truth for
//! savings amounts; this crate fetches it from an algod v2 REST node and
//! decodes it into `OnChainGoal`. Degraded reads (placeholder goals with no
//! deployed contract) are surfaced as `Sourced::Fallback`, never silently.
//!
//! Transaction building, signing, and wallet sessions are out of scope; the
//! wallet owns those.

pub mod address;
pub mod client;
pub mod errors;
pub mod nft;
pub mod state;

pub use address::application_address;
pub use client::AlgodClient;
pub use errors::ChainError;
pub use nft::{build_arc3_metadata, Arc3Metadata, Arc3Properties};
pub use state::OnChainGoal;

/// Public Algorand TestNet node, no API token required.
pub const DEFAULT_ALGOD_URL: &str = "https://testnet-api.algonode.cloud";
