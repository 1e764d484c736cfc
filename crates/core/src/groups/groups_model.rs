//! Group savings domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A shared savings goal with multiple contributing members.
///
/// Invariant: `members` always contains at least the creator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub target_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub members: Vec<GroupMember>,
    /// 6 uppercase alphanumerics, truncated from a random identifier.
    pub invite_code: String,
}

/// Input model for creating a group.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub target_amount: Decimal,
    pub deadline: DateTime<Utc>,
    pub created_by: String,
}

/// A member of a savings group. One entry per address per group;
/// `contributed` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub address: String,
    pub nickname: String,
    pub contributed: Decimal,
    pub joined_at: DateTime<Utc>,
}

impl GroupMember {
    /// A freshly joined member with no contributions yet.
    pub fn joining_now(address: String, nickname: String) -> Self {
        GroupMember {
            address,
            nickname,
            contributed: Decimal::ZERO,
            joined_at: Utc::now(),
        }
    }
}
