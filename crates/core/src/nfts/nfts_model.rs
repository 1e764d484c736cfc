//! Achievement NFT domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached mint result for a completed goal, keyed by goal id.
/// Write-once: a goal is minted at most one achievement NFT.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalNft {
    pub asset_id: u64,
    pub tx_id: String,
    pub minted_at: DateTime<Utc>,
}
