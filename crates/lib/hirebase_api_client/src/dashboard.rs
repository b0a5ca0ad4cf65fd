//! Admin dashboard fan-out.
//!
//! The dashboard loads eight collections at once. Each panel owns its own
//! `Result`, so one failing endpoint leaves the others intact.

use futures::join;
use hirebase_core::finance::FinanceSummary;
use hirebase_core::models::{
    Category, Company, GovernmentJob, Job, PaymentsData, Service, WalletData, WithdrawalRequest,
};
use tracing::warn;

use crate::{ApiError, Client};

/// Everything the admin dashboard shows, one independent result per panel.
#[derive(Debug)]
pub struct AdminDashboard {
    pub services: Result<Vec<Service>, ApiError>,
    pub jobs: Result<Vec<Job>, ApiError>,
    pub companies: Result<Vec<Company>, ApiError>,
    pub government_jobs: Result<Vec<GovernmentJob>, ApiError>,
    pub categories: Result<Vec<Category>, ApiError>,
    pub payments: Result<PaymentsData, ApiError>,
    pub withdrawals: Result<Vec<WithdrawalRequest>, ApiError>,
    pub wallet: Result<WalletData, ApiError>,
}

impl AdminDashboard {
    /// Finance figures from whichever summaries loaded.
    pub fn finance(&self) -> FinanceSummary {
        FinanceSummary::from_summaries(
            self.payments.as_ref().ok().and_then(|p| p.summary.as_ref()),
            self.wallet.as_ref().ok().and_then(|w| w.summary.as_ref()),
        )
    }

    /// `(panel, error)` for every panel that failed.
    pub fn errors(&self) -> Vec<(&'static str, &ApiError)> {
        [
            ("services", self.services.as_ref().err()),
            ("jobs", self.jobs.as_ref().err()),
            ("companies", self.companies.as_ref().err()),
            ("government jobs", self.government_jobs.as_ref().err()),
            ("categories", self.categories.as_ref().err()),
            ("payments", self.payments.as_ref().err()),
            ("withdrawals", self.withdrawals.as_ref().err()),
            ("wallet", self.wallet.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(panel, err)| err.map(|e| (panel, e)))
        .collect()
    }
}

impl Client {
    /// Load every admin dashboard panel concurrently.
    pub async fn admin_dashboard(&self) -> AdminDashboard {
        let (services, jobs, companies, government_jobs, categories, payments, withdrawals, wallet) = join!(
            self.services(),
            self.jobs(),
            self.companies(),
            self.government_jobs(),
            self.categories(),
            self.all_payments(),
            self.withdrawals(),
            self.all_wallet_transactions(),
        );
        let dashboard = AdminDashboard {
            services,
            jobs,
            companies,
            government_jobs,
            categories,
            payments,
            withdrawals,
            wallet,
        };
        for (panel, err) in dashboard.errors() {
            warn!(panel, error = %err, "dashboard panel failed to load");
        }
        dashboard
    }
}
