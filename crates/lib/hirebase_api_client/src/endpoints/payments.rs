use hirebase_core::models::{Envelope, PaymentsData};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    /// The signed-in user's subscription payments.
    pub async fn my_payments(&self) -> Result<PaymentsData, ApiError> {
        let env: Envelope<PaymentsData> = self
            .fetch("/api/payments/my-transactions", RequestOptions::get())
            .await?;
        Ok(env.data)
    }

    /// Every payment with totals. Admin only.
    pub async fn all_payments(&self) -> Result<PaymentsData, ApiError> {
        let env: Envelope<PaymentsData> = self
            .fetch("/api/payments/all-transactions", RequestOptions::get())
            .await?;
        Ok(env.data)
    }
}
