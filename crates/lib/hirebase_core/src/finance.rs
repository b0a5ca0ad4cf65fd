//! Finance figures shown on the admin dashboard and transactions views.
//!
//! These are display derivations of totals the backend already computed;
//! nothing here is authoritative.

use thiserror::Error;

use crate::models::{PaymentSummary, PayoutInput, WalletSummary, WithdrawalRequest};

/// GST charged on subscription payments.
pub const GST_RATE: f64 = 0.18;

/// Default payout mode offered by the admin form.
pub const DEFAULT_PAYMENT_MODE: &str = "UPI";

/// Round to two decimal places (paise).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// GST portion of a gross amount.
pub fn gst_on(amount: f64) -> f64 {
    round2(amount * GST_RATE)
}

/// Gross amount minus GST, never negative.
pub fn net_of_gst(amount: f64) -> f64 {
    round2(amount - gst_on(amount)).max(0.0)
}

/// Headline finance figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceSummary {
    /// Completed incoming payments.
    pub incoming_total: f64,
    pub payments_completed: u64,
    pub payments_total: u64,
    pub gst_total: f64,
    pub net_payment_total: f64,
    pub payouts_requested: f64,
    pub payouts_paid: f64,
    /// Net payments minus payouts already made.
    pub net_profit: f64,
}

impl FinanceSummary {
    /// Derive the headline figures. Missing summaries count as zero.
    pub fn from_summaries(
        payments: Option<&PaymentSummary>,
        wallet: Option<&WalletSummary>,
    ) -> Self {
        let incoming_total = payments.map(|p| p.total_amount).unwrap_or(0.0);
        let payouts_paid = wallet.map(|w| w.total_paid).unwrap_or(0.0);
        let gst_total = gst_on(incoming_total);
        let net_payment_total = (incoming_total - gst_total).max(0.0);
        Self {
            incoming_total,
            payments_completed: payments.map(|p| p.counts.completed).unwrap_or(0),
            payments_total: payments.map(|p| p.counts.total).unwrap_or(0),
            gst_total,
            net_payment_total,
            payouts_requested: wallet.map(|w| w.total_requested).unwrap_or(0.0),
            payouts_paid,
            net_profit: (net_payment_total - payouts_paid).max(0.0),
        }
    }
}

/// Reasons a payout form is rejected before it reaches the backend.
#[derive(Debug, Error, PartialEq)]
pub enum PayoutError {
    #[error("Transaction ID is required")]
    MissingTransactionId,

    #[error("Enter a valid paid amount")]
    InvalidAmount,

    #[error("Paid amount exceeds remaining ({remaining})")]
    ExceedsRemaining { remaining: f64 },
}

/// Validate a payout against the withdrawal it settles.
pub fn validate_payout(
    request: &WithdrawalRequest,
    txn_id: &str,
    mode: &str,
    proof_url: &str,
    amount: f64,
) -> Result<PayoutInput, PayoutError> {
    let txn_id = txn_id.trim();
    if txn_id.is_empty() {
        return Err(PayoutError::MissingTransactionId);
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PayoutError::InvalidAmount);
    }
    let remaining = request.remaining();
    if amount > remaining {
        return Err(PayoutError::ExceedsRemaining { remaining });
    }
    let mode = mode.trim();
    Ok(PayoutInput {
        payment_txn_id: txn_id.to_string(),
        payment_mode: if mode.is_empty() {
            DEFAULT_PAYMENT_MODE.to_string()
        } else {
            mode.to_string()
        },
        proof_url: proof_url.trim().to_string(),
        paid_amount: amount,
    })
}

/// Indian rupee display with two decimals.
pub fn format_inr(amount: f64) -> String {
    format!("₹{amount:.2}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{PaymentCounts, WalletCounts};

    fn request(amount: f64, paid: f64) -> WithdrawalRequest {
        serde_json::from_value(json!({
            "_id": "w1", "amount": amount, "status": "approved", "paidAmount": paid
        }))
        .unwrap()
    }

    #[test]
    fn gst_and_net_are_rounded_to_paise() {
        assert_eq!(gst_on(100.0), 18.0);
        assert_eq!(net_of_gst(100.0), 82.0);
        assert_eq!(gst_on(99.99), 18.0);
        assert_eq!(net_of_gst(99.99), 81.99);
        assert_eq!(net_of_gst(0.0), 0.0);
    }

    #[test]
    fn summary_derives_profit() {
        let payments = PaymentSummary {
            total_amount: 1000.0,
            counts: PaymentCounts {
                total: 12,
                completed: 10,
                pending: 1,
                failed: 1,
            },
            ..Default::default()
        };
        let wallet = WalletSummary {
            total_paid: 300.0,
            total_requested: 450.0,
            counts: WalletCounts::default(),
        };
        let s = FinanceSummary::from_summaries(Some(&payments), Some(&wallet));
        assert_eq!(s.gst_total, 180.0);
        assert_eq!(s.net_payment_total, 820.0);
        assert_eq!(s.net_profit, 520.0);
        assert_eq!(s.payouts_requested, 450.0);
        assert_eq!(s.payments_completed, 10);
        assert_eq!(s.payments_total, 12);
    }

    #[test]
    fn profit_is_floored_at_zero() {
        let payments = PaymentSummary {
            total_amount: 100.0,
            ..Default::default()
        };
        let wallet = WalletSummary {
            total_paid: 500.0,
            ..Default::default()
        };
        let s = FinanceSummary::from_summaries(Some(&payments), Some(&wallet));
        assert_eq!(s.net_profit, 0.0);
    }

    #[test]
    fn missing_summaries_are_zero() {
        assert_eq!(
            FinanceSummary::from_summaries(None, None),
            FinanceSummary::default()
        );
    }

    #[test]
    fn payout_requires_transaction_id() {
        let err = validate_payout(&request(500.0, 0.0), "  ", "UPI", "", 100.0).unwrap_err();
        assert_eq!(err, PayoutError::MissingTransactionId);
    }

    #[test]
    fn payout_rejects_non_positive_amounts() {
        let req = request(500.0, 0.0);
        assert_eq!(
            validate_payout(&req, "tx", "UPI", "", 0.0).unwrap_err(),
            PayoutError::InvalidAmount
        );
        assert_eq!(
            validate_payout(&req, "tx", "UPI", "", f64::NAN).unwrap_err(),
            PayoutError::InvalidAmount
        );
    }

    #[test]
    fn payout_cannot_exceed_remaining() {
        let err = validate_payout(&request(500.0, 200.0), "tx", "UPI", "", 301.0).unwrap_err();
        assert_eq!(err, PayoutError::ExceedsRemaining { remaining: 300.0 });
    }

    #[test]
    fn valid_payout_builds_body() {
        let body = validate_payout(&request(500.0, 200.0), " tx9 ", "", " https://p ", 300.0)
            .unwrap();
        assert_eq!(
            body,
            PayoutInput {
                payment_txn_id: "tx9".into(),
                payment_mode: "UPI".into(),
                proof_url: "https://p".into(),
                paid_amount: 300.0,
            }
        );
    }

    #[test]
    fn inr_formatting() {
        assert_eq!(format_inr(12.5), "₹12.50");
    }
}
