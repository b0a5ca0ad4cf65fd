//! Endpoint wrappers, one module per backend resource.
//!
//! Each wrapper decodes the `{ status, data }` envelope and returns the
//! payload inside `data`. Admin-only endpoints rely on the backend for
//! authorization; callers run [`hirebase_core::guard::require_admin`] first.

pub mod auth;
pub mod categories;
pub mod companies;
pub mod government_jobs;
pub mod jobs;
pub mod payments;
pub mod referrals;
pub mod services;
pub mod subscriptions;
pub mod wallet;

/// One page of a server-paginated collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// Total item count across all pages, `0` when the backend omits it.
    pub total: u64,
}
