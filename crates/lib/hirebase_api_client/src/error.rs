//! The client's single error type.

use hirebase_core::finance::PayoutError;
use hirebase_core::geo::SearchError;
use hirebase_core::models::ListingError;
use hirebase_core::session::SessionError;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by [`crate::Client`] and [`crate::GeoClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `payload` is the parsed body, if it was JSON.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request could not be built, e.g. a malformed base URL.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    /// A 2xx response whose body does not match the expected schema.
    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid header {0}")]
    InvalidHeader(String),

    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub(crate) fn http(status: StatusCode, payload: Option<Value>) -> Self {
        ApiError::Http {
            status: status.as_u16(),
            message: error_message(status, payload.as_ref()),
            payload,
        }
    }

    /// HTTP status for backend failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw parsed payload of a failed response.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Http { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text a view shows inline for this error.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::InvalidRequest(err)
        } else {
            ApiError::Network(err)
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PayoutError> for ApiError {
    fn from(err: PayoutError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Message for a failed response: the payload's non-empty `message` string,
/// else `"<status> <reason>"`.
pub fn error_message(status: StatusCode, payload: Option<&Value>) -> String {
    if let Some(message) = payload
        .and_then(|p| p.get("message"))
        .and_then(Value::as_str)
        && !message.is_empty()
    {
        return message.to_string();
    }
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .trim_end()
    .to_string()
}
