//! Referral programme models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Populated, UserRef};

/// Minimal reference to the payment that produced a commission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Commission credited to the referrer for a downline purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub level: u32,
    pub subscription_type: Option<String>,
    #[serde(default)]
    pub source_user: Option<Populated<UserRef>>,
    #[serde(default)]
    pub transaction: Option<Populated<TransactionRef>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub commissions: Vec<Commission>,
}

/// Node of the referral tree. Level 1 nodes are direct referrals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralNode {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub referral_id: Option<String>,
    pub level: u32,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub children: Vec<ReferralNode>,
}

impl ReferralNode {
    /// Number of referrals below this node, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralTreeData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub tree: Vec<ReferralNode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelEarning {
    pub level: u32,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub count: u64,
}

/// Wallet and earnings overview for the signed-in referrer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSummary {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub wallet_balance: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub available_balance: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub min_withdrawal: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub pending_withdrawal_amount: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub has_pending_withdrawal: bool,
    pub referral_id: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub referral_count: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub by_level: Vec<LevelEarning>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_earned: f64,
}

/// Commission rate per level (decimal fractions) and withdrawal floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSettings {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub level_rates: Vec<f64>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub min_withdrawal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralSettingsData {
    #[serde(default)]
    pub settings: Option<ReferralSettings>,
}
