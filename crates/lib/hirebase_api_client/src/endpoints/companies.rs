use hirebase_core::models::{CompaniesData, Company, CompanyData, CompanyInput, Envelope};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    pub async fn companies(&self) -> Result<Vec<Company>, ApiError> {
        let env: Envelope<CompaniesData> =
            self.fetch("/api/companies", RequestOptions::get()).await?;
        Ok(env.data.companies)
    }

    pub async fn my_companies(&self) -> Result<Vec<Company>, ApiError> {
        let env: Envelope<CompaniesData> = self
            .fetch("/api/companies/my-companies", RequestOptions::get())
            .await?;
        Ok(env.data.companies)
    }

    pub async fn create_company(&self, input: &CompanyInput) -> Result<Company, ApiError> {
        let env: Envelope<CompanyData> = self
            .fetch("/api/companies", RequestOptions::post().json(input)?)
            .await?;
        Ok(env.data.company)
    }

    pub async fn update_company(&self, id: &str, input: &CompanyInput) -> Result<Company, ApiError> {
        let path = format!("/api/companies/{id}");
        let env: Envelope<CompanyData> =
            self.fetch(&path, RequestOptions::patch().json(input)?).await?;
        Ok(env.data.company)
    }

    /// Update the user's existing company, or create one when `existing_id`
    /// is `None`. Incomplete input is rejected before any request is sent.
    pub async fn save_company(
        &self,
        existing_id: Option<&str>,
        input: &CompanyInput,
    ) -> Result<Company, ApiError> {
        if !input.is_complete() {
            return Err(ApiError::Validation(
                "Company name and address, country, state, city and district are required."
                    .into(),
            ));
        }
        match existing_id {
            Some(id) => self.update_company(id, input).await,
            None => self.create_company(input).await,
        }
    }
}
