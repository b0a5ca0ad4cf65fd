//! # hirebase_api_client
//!
//! Typed HTTP client for the Hirebase marketplace backend.
//!
//! [`Client`] wraps a `reqwest::Client`, the configured base URL and the
//! caller's [`Session`]. Every request reads the bearer token from the
//! session at send time, so signing in or out through the same session
//! handle takes effect on the next call.
//!
//! Endpoint wrappers live in [`endpoints`] as inherent methods on
//! [`Client`]; third-party geocoding lives in [`geocode`].

pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod geocode;
pub mod request;

use hirebase_core::config::ClientConfig;
use hirebase_core::session::Session;

pub use dashboard::AdminDashboard;
pub use error::{ApiError, error_message};
pub use geocode::GeoClient;
pub use request::{Body, RequestOptions};

/// Build the underlying `reqwest` client with the configured timeout.
pub(crate) fn http_client(config: &ClientConfig) -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Authenticated client for the marketplace API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl Client {
    /// Create a client from resolved configuration.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        Ok(Self::with_http(
            http_client(config)?,
            &config.api_base_url,
            session,
        ))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: &str, session: Session) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
