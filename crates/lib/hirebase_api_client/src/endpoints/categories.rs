use hirebase_core::models::{
    CategoriesData, Category, CategoryData, CategoryInput, CategoryKind, Envelope,
};

use crate::{ApiError, Client, RequestOptions};

impl Client {
    /// All categories. Public.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let env: Envelope<CategoriesData> = self
            .fetch("/api/categories", RequestOptions::get().auth(false))
            .await?;
        Ok(env.data.categories)
    }

    /// Categories of one listing family. Public.
    pub async fn categories_by_kind(&self, kind: CategoryKind) -> Result<Vec<Category>, ApiError> {
        let path = format!("/api/categories/type/{kind}");
        let env: Envelope<CategoriesData> =
            self.fetch(&path, RequestOptions::get().auth(false)).await?;
        Ok(env.data.categories)
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        let env: Envelope<CategoryData> = self
            .fetch("/api/categories", RequestOptions::post().json(input)?)
            .await?;
        Ok(env.data.category)
    }

    pub async fn update_category(
        &self,
        id: &str,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        let path = format!("/api/categories/{id}");
        let env: Envelope<CategoryData> =
            self.fetch(&path, RequestOptions::put().json(input)?).await?;
        Ok(env.data.category)
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/categories/{id}");
        self.fetch_value(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}
