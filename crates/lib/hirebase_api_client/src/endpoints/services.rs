use hirebase_core::geo::SearchQuery;
use hirebase_core::models::{Envelope, Service, ServiceData, ServiceInput, ServicesData};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    pub async fn services(&self) -> Result<Vec<Service>, ApiError> {
        let env: Envelope<ServicesData> = self.fetch("/api/services", RequestOptions::get()).await?;
        Ok(env.data.services)
    }

    pub async fn my_services(&self) -> Result<Vec<Service>, ApiError> {
        let env: Envelope<ServicesData> = self
            .fetch("/api/services/my-services", RequestOptions::get())
            .await?;
        Ok(env.data.services)
    }

    /// Keyword + location search. A blank keyword and address is rejected
    /// locally.
    pub async fn search_services(&self, query: &SearchQuery) -> Result<Vec<Service>, ApiError> {
        let opts = RequestOptions::get().query(query.to_pairs()?);
        let env: Envelope<ServicesData> = self.fetch("/api/services/search", opts).await?;
        Ok(env.data.services)
    }

    /// Post a service. Returns the created listing when the backend echoes it.
    pub async fn create_service(&self, input: &ServiceInput) -> Result<Option<Service>, ApiError> {
        let env: Envelope<ServiceData> = self
            .fetch("/api/services", RequestOptions::post().json(input)?)
            .await?;
        Ok(env.data.service)
    }

    pub async fn update_service(
        &self,
        id: &str,
        input: &ServiceInput,
    ) -> Result<Option<Service>, ApiError> {
        let path = format!("/api/services/{id}");
        let env: Envelope<ServiceData> =
            self.fetch(&path, RequestOptions::put().json(input)?).await?;
        Ok(env.data.service)
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/services/{id}");
        self.fetch_value(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}
