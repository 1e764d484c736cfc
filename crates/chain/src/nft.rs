//! ARC-3 achievement NFT metadata.
//!
//! The achievement NFT is an Algorand Standard Asset with total supply 1 and
//! 0 decimals; its metadata travels in the mint transaction note following
//! the ARC-3 convention. Building the metadata is pure and lives here; the
//! mint itself is signed by the wallet and is out of scope.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Algorand caps asset names at 32 bytes.
pub const MAX_ASSET_NAME_BYTES: usize = 32;

/// ARC-3 compliant metadata for a goal achievement NFT.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Arc3Metadata {
    pub name: String,
    pub description: String,
    pub decimals: u32,
    pub properties: Arc3Properties,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Arc3Properties {
    pub goal_name: String,
    pub target_amount_microalgos: u64,
    pub total_saved_microalgos: u64,
    pub app_id: u64,
    pub completed_at: String,
}

/// Build the ARC-3 metadata object for a completed goal.
pub fn build_arc3_metadata(
    goal_name: &str,
    app_id: u64,
    target_amount_microalgos: u64,
    total_saved_microalgos: u64,
) -> Arc3Metadata {
    Arc3Metadata {
        name: format!("DhanSathi: {goal_name}"),
        description: format!(
            "Achievement NFT for completing the savings goal \"{goal_name}\" on DhanSathi."
        ),
        decimals: 0,
        properties: Arc3Properties {
            goal_name: goal_name.to_string(),
            target_amount_microalgos,
            total_saved_microalgos,
            app_id,
            completed_at: Utc::now().to_rfc3339(),
        },
    }
}

/// Truncate a display name to the on-chain asset name limit, respecting
/// UTF-8 boundaries.
pub fn asset_name_for(goal_name: &str) -> String {
    let full = format!("DhanSathi: {goal_name}");
    if full.len() <= MAX_ASSET_NAME_BYTES {
        return full;
    }
    let mut end = MAX_ASSET_NAME_BYTES;
    while !full.is_char_boundary(end) {
        end -= 1;
    }
    full[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_fields() {
        let meta = build_arc3_metadata("New Laptop", 123, 5_000_000, 5_250_000);
        assert_eq!(meta.name, "DhanSathi: New Laptop");
        assert_eq!(meta.decimals, 0);
        assert_eq!(meta.properties.app_id, 123);
        assert_eq!(meta.properties.target_amount_microalgos, 5_000_000);
        assert_eq!(meta.properties.total_saved_microalgos, 5_250_000);
        assert!(meta.description.contains("New Laptop"));
    }

    #[test]
    fn test_metadata_serializes_with_snake_case_properties() {
        let meta = build_arc3_metadata("Trip", 1, 2, 3);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["properties"]["goal_name"], "Trip");
        assert_eq!(json["properties"]["app_id"], 1);
    }

    #[test]
    fn test_asset_name_truncated_to_32_bytes() {
        let name = asset_name_for("A very long goal name that overflows the limit");
        assert!(name.len() <= MAX_ASSET_NAME_BYTES);
        assert!(name.starts_with("DhanSathi: "));

        assert_eq!(asset_name_for("Trip"), "DhanSathi: Trip");
    }

    #[test]
    fn test_asset_name_respects_utf8_boundary() {
        let name = asset_name_for("Café fund with a long long tail");
        assert!(name.len() <= MAX_ASSET_NAME_BYTES);
        // must still be valid UTF-8 (would panic on slice otherwise)
        assert!(name.chars().count() > 0);
    }
}
