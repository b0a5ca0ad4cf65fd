//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Production backend used when `HIREBASE_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE: &str = "https://service-app-cqjri.ondigitalocean.app";

/// Public Nominatim instance for forward/reverse geocoding.
pub const DEFAULT_GEOCODE_BASE: &str = "https://nominatim.openstreetmap.org";

/// Public IP geolocation endpoint used as a fallback.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid HIREBASE_TIMEOUT_SECS value: {0}")]
    InvalidTimeout(String),
}

/// Configuration shared by the API client, the geocoder and the CLI.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Root of the backend REST API; request paths are appended verbatim.
    pub api_base_url: String,
    /// Root of the geocoding service.
    pub geocode_base_url: String,
    /// Full URL of the IP geolocation endpoint.
    pub ip_lookup_url: String,
    /// File holding the persisted session (token + admin flag).
    pub session_file: PathBuf,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                 | Default                                   |
    /// |--------------------------|-------------------------------------------|
    /// | `HIREBASE_API_BASE_URL`  | [`DEFAULT_API_BASE`]                      |
    /// | `HIREBASE_GEOCODE_URL`   | [`DEFAULT_GEOCODE_BASE`]                  |
    /// | `HIREBASE_IP_LOOKUP_URL` | [`DEFAULT_IP_LOOKUP_URL`]                 |
    /// | `HIREBASE_SESSION_FILE`  | `<data dir>/hirebase/session.json`        |
    /// | `HIREBASE_TIMEOUT_SECS`  | none                                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match get("HIREBASE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_base_url: normalize_base(
                &get("HIREBASE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE.into()),
            ),
            geocode_base_url: normalize_base(
                &get("HIREBASE_GEOCODE_URL").unwrap_or_else(|| DEFAULT_GEOCODE_BASE.into()),
            ),
            ip_lookup_url: get("HIREBASE_IP_LOOKUP_URL")
                .unwrap_or_else(|| DEFAULT_IP_LOOKUP_URL.into()),
            session_file: get("HIREBASE_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_session_file),
            timeout,
        })
    }

    /// Override the API base URL (used by the CLI `--api-base` flag).
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base_url = normalize_base(base);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.into(),
            geocode_base_url: DEFAULT_GEOCODE_BASE.into(),
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.into(),
            session_file: default_session_file(),
            timeout: None,
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Default location of the persisted session file.
pub fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hirebase")
        .join("session.json")
}
