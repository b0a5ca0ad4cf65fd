use hirebase_core::finance::validate_payout;
use hirebase_core::models::{
    Envelope, WalletData, WithdrawalData, WithdrawalRequest, WithdrawalsData,
};

use crate::{ApiError, Client, RequestOptions};

/// Payout details entered by an admin.
#[derive(Debug, Clone, Default)]
pub struct PayoutForm {
    pub txn_id: String,
    pub mode: String,
    pub proof_url: String,
    pub amount: f64,
}

impl Client {
    pub async fn my_wallet_transactions(&self) -> Result<WalletData, ApiError> {
        let env: Envelope<WalletData> = self
            .fetch("/api/wallet/my-transactions", RequestOptions::get())
            .await?;
        Ok(env.data)
    }

    /// Every wallet payout with totals. Admin only.
    pub async fn all_wallet_transactions(&self) -> Result<WalletData, ApiError> {
        let env: Envelope<WalletData> = self
            .fetch("/api/wallet/all-transactions", RequestOptions::get())
            .await?;
        Ok(env.data)
    }

    /// Withdrawal requests. Admin only.
    pub async fn withdrawals(&self) -> Result<Vec<WithdrawalRequest>, ApiError> {
        let env: Envelope<WithdrawalsData> = self
            .fetch("/api/wallet/withdrawals", RequestOptions::get())
            .await?;
        Ok(env.data.requests)
    }

    /// Ask for the available referral balance to be paid out.
    pub async fn request_withdrawal(&self) -> Result<WithdrawalRequest, ApiError> {
        let env: Envelope<WithdrawalData> = self
            .fetch("/api/wallet/withdrawals/request", RequestOptions::post())
            .await?;
        Ok(env.data.request)
    }

    pub async fn approve_withdrawal(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/wallet/withdrawals/{id}/approve");
        self.fetch_value(&path, RequestOptions::patch()).await?;
        Ok(())
    }

    /// Record a payout against `request` after validating it locally.
    pub async fn pay_withdrawal(
        &self,
        request: &WithdrawalRequest,
        form: &PayoutForm,
    ) -> Result<(), ApiError> {
        let body = validate_payout(
            request,
            &form.txn_id,
            &form.mode,
            &form.proof_url,
            form.amount,
        )?;
        let path = format!("/api/wallet/withdrawals/{}/pay", request.id);
        self.fetch_value(&path, RequestOptions::post().json(&body)?)
            .await?;
        Ok(())
    }
}
