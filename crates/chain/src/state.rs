//! Contract global state decoding.
//!
//! algod returns application global state as a list of base64-encoded keys
//! with tagged values (type 1 = byte slice, type 2 = uint). The SavingsVault
//! contract keeps four uints (`target_amount`, `total_saved`, `deadline`,
//! `goal_completed`) and one byte slice (`goal_owner`).

use crate::address::encode_address;
use crate::errors::ChainError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// State fetched from the savings contract, the source of truth for a goal.
/// Amounts in microALGOs, deadline as a unix timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChainGoal {
    pub goal_owner: String,
    pub target_amount: u64,
    pub total_saved: u64,
    pub deadline: i64,
    pub goal_completed: bool,
    /// Escrow account balance, in microALGOs.
    pub balance: u64,
}

/// One key/value pair of application global state, as returned by algod.
#[derive(Debug, Deserialize)]
pub(crate) struct TealKeyValue {
    /// base64-encoded key
    pub key: String,
    pub value: TealValue,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TealValue {
    /// 1 = byte slice, 2 = uint
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub bytes: String,
    #[serde(default)]
    pub uint: u64,
}

/// Decode the SavingsVault global state into an `OnChainGoal` (without the
/// escrow balance, which comes from a separate account lookup).
pub(crate) fn decode_global_state(entries: &[TealKeyValue]) -> Result<OnChainGoal, ChainError> {
    let mut goal = OnChainGoal::default();

    for entry in entries {
        let key_bytes = BASE64
            .decode(&entry.key)
            .map_err(|e| ChainError::StateDecode(format!("bad key encoding: {e}")))?;
        let key = String::from_utf8_lossy(&key_bytes);

        match (key.as_ref(), entry.value.kind) {
            ("goal_owner", 1) => {
                let raw = BASE64.decode(&entry.value.bytes).map_err(|e| {
                    ChainError::StateDecode(format!("bad goal_owner encoding: {e}"))
                })?;
                let pubkey: [u8; 32] = raw.as_slice().try_into().map_err(|_| {
                    ChainError::StateDecode(format!(
                        "goal_owner has {} bytes, expected 32",
                        raw.len()
                    ))
                })?;
                goal.goal_owner = encode_address(&pubkey);
            }
            ("target_amount", 2) => goal.target_amount = entry.value.uint,
            ("total_saved", 2) => goal.total_saved = entry.value.uint,
            ("deadline", 2) => goal.deadline = entry.value.uint as i64,
            ("goal_completed", 2) => goal.goal_completed = entry.value.uint == 1,
            // unknown keys are ignored
            _ => {}
        }
    }

    Ok(goal)
}
