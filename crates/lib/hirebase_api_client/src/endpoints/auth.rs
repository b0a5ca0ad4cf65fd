use hirebase_core::models::{AdminUser, Envelope, ProfileData, ProfileUpdate, UserProfile, UsersData};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    /// The signed-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let env: Envelope<ProfileData> = self
            .fetch("/api/auth/profile", RequestOptions::get())
            .await?;
        Ok(env.data.user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let env: Envelope<ProfileData> = self
            .fetch("/api/auth/profile", RequestOptions::put().json(update)?)
            .await?;
        Ok(env.data.user)
    }

    /// Every registered user. Admin only.
    pub async fn users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let env: Envelope<UsersData> = self.fetch("/api/auth/users", RequestOptions::get()).await?;
        Ok(env.data.users)
    }
}
