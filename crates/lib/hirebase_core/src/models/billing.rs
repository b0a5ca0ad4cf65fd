//! Subscriptions, payments, wallet transactions and withdrawals.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Populated, UserLite};

/// Free job-search trial granted after sign-up.
pub const JOB_TRIAL_DAYS: i64 = 7;

/// Paid subscription plans. Unknown plans are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubscriptionType {
    ServiceSearch,
    JobSearch,
    ServicePost,
    Other(String),
}

impl SubscriptionType {
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionType::ServiceSearch => "SERVICE_SEARCH",
            SubscriptionType::JobSearch => "JOB_SEARCH",
            SubscriptionType::ServicePost => "SERVICE_POST",
            SubscriptionType::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "SERVICE_SEARCH" => SubscriptionType::ServiceSearch,
            "JOB_SEARCH" => SubscriptionType::JobSearch,
            "SERVICE_POST" => SubscriptionType::ServicePost,
            other => SubscriptionType::Other(other.to_string()),
        }
    }

    /// Plan price in rupees, for the known plans.
    pub fn price(&self) -> Option<u32> {
        match self {
            SubscriptionType::ServiceSearch | SubscriptionType::JobSearch => Some(100),
            SubscriptionType::ServicePost => Some(500),
            SubscriptionType::Other(_) => None,
        }
    }

    pub fn benefits(&self) -> &'static [&'static str] {
        match self {
            SubscriptionType::ServiceSearch => &[
                "Search and view services",
                "Filter by categories and location",
                "Contact service providers",
            ],
            SubscriptionType::JobSearch => &[
                "Search and view jobs",
                "Save interests and upload resume",
                "Contact job posters",
            ],
            SubscriptionType::ServicePost => &[
                "Post services without limits",
                "Multiple categories per service",
                "Priority visibility",
            ],
            SubscriptionType::Other(_) => &[],
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SubscriptionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SubscriptionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SubscriptionType::parse(&raw))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<Populated<UserLite>>,
    #[serde(rename = "type")]
    pub kind: SubscriptionType,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub free_service_post_used: bool,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub is_active: bool,
    pub days_remaining: Option<i64>,
}

impl Subscription {
    pub fn user_doc(&self) -> Option<&UserLite> {
        self.user.as_ref().and_then(Populated::doc)
    }
}

/// Whether the user may search services (either search or post plan).
pub fn has_service_search_access(subs: &[Subscription]) -> bool {
    subs.iter().any(|s| {
        matches!(
            s.kind,
            SubscriptionType::ServiceSearch | SubscriptionType::ServicePost
        )
    })
}

pub fn has_plan(subs: &[Subscription], plan: &SubscriptionType) -> bool {
    subs.iter().any(|s| &s.kind == plan)
}

/// The first service post is free for users without a post plan.
pub fn first_post_free_eligible(subs: &[Subscription], my_services_count: usize) -> bool {
    !has_plan(subs, &SubscriptionType::ServicePost) && my_services_count == 0
}

/// Job search is open for [`JOB_TRIAL_DAYS`] after sign-up.
pub fn job_trial_active(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match created_at {
        Some(created) => now - created < Duration::days(JOB_TRIAL_DAYS),
        None => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub subscriptions: Vec<Subscription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub active_counts: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub active_users_count: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub free_users_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllSubscriptionsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub summary: Option<SubscriptionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    #[serde(rename = "type")]
    pub kind: SubscriptionType,
}

/// Incoming subscription payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTxn {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<Populated<UserLite>>,
    pub subscription_type: Option<SubscriptionType>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub razorpay_payment_id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub razorpay_order_id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl PaymentTxn {
    pub fn user_doc(&self) -> Option<&UserLite> {
        self.user.as_ref().and_then(Populated::doc)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentCounts {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub completed: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub pending: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub failed: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeTotal {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    /// Sum of completed payments.
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub counts: PaymentCounts,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub by_type: BTreeMap<String, TypeTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub transactions: Vec<PaymentTxn>,
    #[serde(default)]
    pub summary: Option<PaymentSummary>,
}

/// Withdrawal lifecycle: requested → approved → paid, or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Requested,
    Approved,
    Rejected,
    Paid,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawalStatus::Requested => f.write_str("requested"),
            WithdrawalStatus::Approved => f.write_str("approved"),
            WithdrawalStatus::Rejected => f.write_str("rejected"),
            WithdrawalStatus::Paid => f.write_str("paid"),
            WithdrawalStatus::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<Populated<UserLite>>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub amount: f64,
    pub status: WithdrawalStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub paid_amount: f64,
}

impl WithdrawalRequest {
    pub fn user_doc(&self) -> Option<&UserLite> {
        self.user.as_ref().and_then(Populated::doc)
    }

    /// Amount still owed on this request, never negative.
    pub fn remaining(&self) -> f64 {
        (self.amount - self.paid_amount).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub requests: Vec<WithdrawalRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalData {
    pub request: WithdrawalRequest,
}

/// Snapshot of the withdrawal a payout settles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalSnapshot {
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Wallet ledger entry (payouts to referrers).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTxn {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<Populated<UserLite>>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub status: String,
    #[serde(default)]
    pub withdrawal_request: Option<Populated<WithdrawalSnapshot>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl WalletTxn {
    pub fn user_doc(&self) -> Option<&UserLite> {
        self.user.as_ref().and_then(Populated::doc)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletCounts {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub requested: u64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub paid: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_paid: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub total_requested: f64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub counts: WalletCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub transactions: Vec<WalletTxn>,
    #[serde(default)]
    pub summary: Option<WalletSummary>,
}

/// Body for recording a payout against a withdrawal request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutInput {
    pub payment_txn_id: String,
    pub payment_mode: String,
    pub proof_url: String,
    pub paid_amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstUse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub first_use: bool,
}
