use hirebase_core::geo::{SearchQuery, candidate_pairs};
use hirebase_core::models::{
    Candidate, CandidatesData, Envelope, InterestsData, Job, JobData, JobInput, JobInterests,
    JobsData, SavedInterests,
};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        let env: Envelope<JobsData> = self.fetch("/api/jobs", RequestOptions::get()).await?;
        Ok(env.data.jobs)
    }

    pub async fn my_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let env: Envelope<JobsData> = self.fetch("/api/jobs/my-jobs", RequestOptions::get()).await?;
        Ok(env.data.jobs)
    }

    /// Private job search by keyword and location.
    pub async fn search_jobs(&self, query: &SearchQuery) -> Result<Vec<Job>, ApiError> {
        let opts = RequestOptions::get().query(query.to_pairs()?);
        let env: Envelope<JobsData> = self.fetch("/api/jobs/search", opts).await?;
        Ok(env.data.jobs)
    }

    /// Job seekers interested in any of `category_ids`.
    pub async fn search_candidates(
        &self,
        category_ids: &[String],
    ) -> Result<Vec<Candidate>, ApiError> {
        let opts = RequestOptions::get().query(candidate_pairs(category_ids));
        let env: Envelope<CandidatesData> =
            self.fetch("/api/jobs/candidates/search", opts).await?;
        Ok(env.data.candidates)
    }

    /// The user's saved job interests, `None` when nothing was saved yet.
    pub async fn my_interests(&self) -> Result<Option<SavedInterests>, ApiError> {
        let env: Envelope<InterestsData> = self
            .fetch("/api/jobs/interests/my", RequestOptions::get())
            .await?;
        Ok(env.data.interests)
    }

    pub async fn update_interests(&self, interests: &JobInterests) -> Result<(), ApiError> {
        self.fetch_value("/api/jobs/interests/my", RequestOptions::put().json(interests)?)
            .await?;
        Ok(())
    }

    pub async fn create_job(&self, input: &JobInput) -> Result<Option<Job>, ApiError> {
        let env: Envelope<JobData> = self
            .fetch("/api/jobs", RequestOptions::post().json(input)?)
            .await?;
        Ok(env.data.job)
    }

    pub async fn update_job(&self, id: &str, input: &JobInput) -> Result<Option<Job>, ApiError> {
        let path = format!("/api/jobs/{id}");
        let env: Envelope<JobData> = self.fetch(&path, RequestOptions::put().json(input)?).await?;
        Ok(env.data.job)
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/jobs/{id}");
        self.fetch_value(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}
