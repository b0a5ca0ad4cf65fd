use hirebase_core::models::{
    AllSubscriptionsData, Envelope, FirstUse, SubscribeRequest, Subscription, SubscriptionType,
    SubscriptionsData,
};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    pub async fn my_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        let env: Envelope<SubscriptionsData> = self
            .fetch("/api/subscriptions/my-subscriptions", RequestOptions::get())
            .await?;
        Ok(env.data.subscriptions)
    }

    /// Buy a plan. Payment itself happens on the backend.
    pub async fn subscribe(&self, kind: SubscriptionType) -> Result<(), ApiError> {
        let body = SubscribeRequest { kind };
        self.fetch_value("/api/subscriptions", RequestOptions::post().json(&body)?)
            .await?;
        Ok(())
    }

    /// Subscriptions of one user. Admin only.
    pub async fn user_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, ApiError> {
        let path = format!("/api/subscriptions/user/{user_id}");
        let env: Envelope<SubscriptionsData> = self.fetch(&path, RequestOptions::get()).await?;
        Ok(env.data.subscriptions)
    }

    /// Every subscription plus plan counts. Admin only.
    pub async fn all_subscriptions(&self) -> Result<AllSubscriptionsData, ApiError> {
        let env: Envelope<AllSubscriptionsData> = self
            .fetch("/api/subscriptions/all", RequestOptions::get())
            .await?;
        Ok(env.data)
    }

    /// Whether this is the user's first visit to the dashboard.
    pub async fn check_first_use(&self) -> Result<bool, ApiError> {
        let env: Envelope<FirstUse> = self
            .fetch(
                "/api/usage/check-first-use",
                RequestOptions::get().query([("type", "DASHBOARD")]),
            )
            .await?;
        Ok(env.data.first_use)
    }
}
