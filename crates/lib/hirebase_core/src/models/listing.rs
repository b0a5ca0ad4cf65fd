//! Marketplace listings: categories, services, jobs and government jobs.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserLite;
use crate::geo::Location;

/// Which listing family a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Service,
    Job,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Service => f.write_str("Service"),
            CategoryKind::Job => f.write_str("Job"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<CategoryKind>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPrice {
    pub category: Category,
    pub price: f64,
}

/// A posted service offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub category_prices: Vec<CategoryPrice>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub location: Location,
    pub user: Option<UserLite>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub is_company_post: bool,
    pub company_id: Option<String>,
}

/// `{ category, price }` pair in a service post body, by category id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPriceInput {
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub category_prices: Vec<CategoryPriceInput>,
    pub location: Location,
    pub is_company_post: bool,
    pub company_id: Option<String>,
}

/// Reasons a listing post is rejected before it reaches the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Please select at least one category.")]
    NoCategories,

    #[error("You have used your free service post. Please subscribe to post more services.")]
    FreePostUsed,

    #[error("Multiple categories require a Service Post subscription.")]
    MultipleCategoriesNeedPlan,

    #[error("Please set a positive price for each selected category.")]
    InvalidPrice,

    #[error("Please fill complete location (address, country, state, city, district, pincode).")]
    IncompleteLocation,
}

impl ServiceInput {
    /// Check a new service post. Without a post plan only a single-category
    /// first post is allowed.
    pub fn validate(
        &self,
        has_post_plan: bool,
        my_services_count: usize,
    ) -> Result<(), ListingError> {
        if self.category_prices.is_empty() {
            return Err(ListingError::NoCategories);
        }
        if !has_post_plan && my_services_count >= 1 {
            return Err(ListingError::FreePostUsed);
        }
        if !has_post_plan && self.category_prices.len() > 1 {
            return Err(ListingError::MultipleCategoriesNeedPlan);
        }
        if self
            .category_prices
            .iter()
            .any(|cp| !cp.price.is_finite() || cp.price <= 0.0)
        {
            return Err(ListingError::InvalidPrice);
        }
        if !self.location.is_complete() {
            return Err(ListingError::IncompleteLocation);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceData {
    pub service: Option<Service>,
}

/// A posted private job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub location: Location,
    pub user: Option<UserLite>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub is_company_post: bool,
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub categories_ids: Vec<String>,
    pub location: Location,
    pub is_company_post: bool,
    pub company_id: Option<String>,
}

impl JobInput {
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.categories_ids.is_empty() {
            return Err(ListingError::NoCategories);
        }
        if !self.location.is_complete() {
            return Err(ListingError::IncompleteLocation);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobData {
    pub job: Option<Job>,
}

/// Job categories a seeker is interested in, plus their resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInterests {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub categories_ids: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub resume_url: String,
}

/// Stored interests as returned by `GET /api/jobs/interests/my`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedInterests {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl SavedInterests {
    /// Convert into the body accepted by the update endpoint.
    pub fn to_input(&self) -> JobInterests {
        JobInterests {
            categories_ids: self.categories.iter().map(|c| c.id.clone()).collect(),
            resume_url: self.resume_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestsData {
    #[serde(default)]
    pub interests: Option<SavedInterests>,
}

/// Job seeker returned by the candidate search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub interested_job_categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub candidates: Vec<Candidate>,
}

/// Known government job families. The backend may add more.
pub const GOVERNMENT_JOB_TYPES: [&str; 4] = ["Govt Jobs", "PSU Jobs", "Semi Govt Jobs", "MSME Jobs"];

/// A public-sector vacancy curated by admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentJob {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_title: String,
    pub organization_name: String,
    pub last_date_to_apply: Option<DateTime<Utc>>,
    pub apply_link: String,
    pub job_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating or editing a government job. `last_date_to_apply` is
/// a `YYYY-MM-DD` date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentJobInput {
    pub job_title: String,
    pub organization_name: String,
    pub last_date_to_apply: String,
    pub apply_link: String,
    pub job_type: String,
}

impl GovernmentJobInput {
    /// Every field is required.
    pub fn is_complete(&self) -> bool {
        [
            &self.job_title,
            &self.organization_name,
            &self.last_date_to_apply,
            &self.apply_link,
            &self.job_type,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentJobsData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub government_jobs: Vec<GovernmentJob>,
}
