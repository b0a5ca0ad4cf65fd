use hirebase_core::geo::{JobKind, SearchQuery};
use hirebase_core::models::{Envelope, GovernmentJob, GovernmentJobInput, GovernmentJobsData};

use crate::{ApiError, Client, RequestOptions};

const INCOMPLETE: &str = "Job title, organization, last date, apply link and job type are required.";

impl Client {
    /// Curated public-sector vacancies. Public.
    pub async fn government_jobs(&self) -> Result<Vec<GovernmentJob>, ApiError> {
        let env: Envelope<GovernmentJobsData> = self
            .fetch("/api/government-jobs", RequestOptions::get().auth(false))
            .await?;
        Ok(env.data.government_jobs)
    }

    /// Keyword search within one government job family.
    pub async fn search_government_jobs(
        &self,
        query: &SearchQuery,
        job_type: &str,
    ) -> Result<Vec<GovernmentJob>, ApiError> {
        let pairs = query.job_pairs(&JobKind::Government(job_type.to_string()))?;
        let env: Envelope<GovernmentJobsData> = self
            .fetch("/api/government-jobs/search", RequestOptions::get().query(pairs))
            .await?;
        Ok(env.data.government_jobs)
    }

    pub async fn create_government_job(&self, input: &GovernmentJobInput) -> Result<(), ApiError> {
        if !input.is_complete() {
            return Err(ApiError::Validation(INCOMPLETE.into()));
        }
        self.fetch_value("/api/government-jobs", RequestOptions::post().json(input)?)
            .await?;
        Ok(())
    }

    pub async fn update_government_job(
        &self,
        id: &str,
        input: &GovernmentJobInput,
    ) -> Result<(), ApiError> {
        if !input.is_complete() {
            return Err(ApiError::Validation(INCOMPLETE.into()));
        }
        let path = format!("/api/government-jobs/{id}");
        self.fetch_value(&path, RequestOptions::patch().json(input)?)
            .await?;
        Ok(())
    }

    pub async fn delete_government_job(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/government-jobs/{id}");
        self.fetch_value(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}
