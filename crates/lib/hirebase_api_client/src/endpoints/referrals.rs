use hirebase_core::models::{
    Commission, CommissionsData, Envelope, ReferralNode, ReferralSettings, ReferralSettingsData,
    ReferralSummary, ReferralTreeData,
};
use hirebase_core::referral::TREE_MAX_DEPTH;

use super::Paged;
use crate::{ApiError, Client, RequestOptions};

impl Client {
    pub async fn referral_summary(&self) -> Result<ReferralSummary, ApiError> {
        let env: Envelope<ReferralSummary> = self
            .fetch("/api/referrals/my-summary", RequestOptions::get())
            .await?;
        Ok(env.data)
    }

    /// One page of direct referral groups, each expanded to the full depth.
    pub async fn referral_tree(&self, page: u32, limit: u32) -> Result<Paged<ReferralNode>, ApiError> {
        let opts = RequestOptions::get().query([
            ("maxDepth", TREE_MAX_DEPTH.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ]);
        let env: Envelope<ReferralTreeData> = self.fetch("/api/referrals/my-tree", opts).await?;
        Ok(Paged {
            total: env.total(),
            items: env.data.tree,
        })
    }

    pub async fn commissions(&self, page: u32, limit: u32) -> Result<Paged<Commission>, ApiError> {
        let opts = RequestOptions::get().query([
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ]);
        let env: Envelope<CommissionsData> =
            self.fetch("/api/referrals/my-commissions", opts).await?;
        Ok(Paged {
            total: env.total(),
            items: env.data.commissions,
        })
    }

    /// Current commission settings, `None` before an admin saved any.
    pub async fn referral_settings(&self) -> Result<Option<ReferralSettings>, ApiError> {
        let env: Envelope<ReferralSettingsData> = self
            .fetch("/api/referrals/settings", RequestOptions::get())
            .await?;
        Ok(env.data.settings)
    }

    /// Save commission settings. Admin only.
    pub async fn update_referral_settings(
        &self,
        settings: &ReferralSettings,
    ) -> Result<Option<ReferralSettings>, ApiError> {
        let env: Envelope<ReferralSettingsData> = self
            .fetch(
                "/api/referrals/settings",
                RequestOptions::put().json(settings)?,
            )
            .await?;
        Ok(env.data.settings)
    }
}
