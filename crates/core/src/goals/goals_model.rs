//! Goals domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal.
///
/// The goal mirrors a deployed contract instance identified by `app_id`.
/// `deposits` is a local display cache; the contract ledger is the source
/// of truth for amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub app_id: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deposits: Vec<Deposit>,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub app_id: u64,
}

/// A recorded contribution toward a goal. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    /// Amount in ALGOs.
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    pub tx_id: String,
}

/// Input model for recording a deposit.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDeposit {
    pub amount: Decimal,
    pub tx_id: String,
}

/// A deposit denormalized with the goal it belongs to, for history views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositWithGoal {
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    pub tx_id: String,
    pub goal_id: String,
    pub goal_name: String,
}
