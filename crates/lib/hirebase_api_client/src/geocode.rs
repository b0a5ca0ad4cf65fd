//! Third-party geocoding: Nominatim forward/reverse lookups with an IP
//! geolocation fallback.
//!
//! These services are unauthenticated and best-effort. A location obtained
//! from the IP fallback is flagged as [`LocationSource::IpApproximation`] so
//! callers can tell the user it is approximate.

use hirebase_core::config::ClientConfig;
use hirebase_core::geo::{
    IpLocation, Location, LocationSource, NominatimPlace, ResolvedLocation,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::request::{decode, read_payload};
use crate::{ApiError, http_client};

const USER_AGENT: &str = concat!("hirebase/", env!("CARGO_PKG_VERSION"));

/// Client for the geocoding and IP lookup services.
#[derive(Debug, Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    geocode_base_url: String,
    ip_lookup_url: String,
}

impl GeoClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::with_http(
            http_client(config)?,
            &config.geocode_base_url,
            &config.ip_lookup_url,
        ))
    }

    pub fn with_http(http: reqwest::Client, geocode_base_url: &str, ip_lookup_url: &str) -> Self {
        Self {
            http,
            geocode_base_url: geocode_base_url.trim_end_matches('/').to_string(),
            ip_lookup_url: ip_lookup_url.to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(url, "geocoding request");
        let response = self
            .http
            .get(url)
            .query(query)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let payload = read_payload(url, response).await?;
        decode(url, payload.unwrap_or(Value::Null))
    }

    /// Best match for a free-text address, if any.
    pub async fn forward(&self, address: &str) -> Result<Option<Location>, ApiError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ApiError::Validation(
                "Please enter an address to geocode.".into(),
            ));
        }
        let url = format!("{}/search", self.geocode_base_url);
        let places: Vec<NominatimPlace> = self
            .get_json(
                &url,
                &[
                    ("q", address.to_string()),
                    ("format", "jsonv2".into()),
                    ("limit", "1".into()),
                ],
            )
            .await?;
        Ok(places.first().map(Location::from_nominatim))
    }

    /// Address at the given coordinates.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Location, ApiError> {
        let url = format!("{}/reverse", self.geocode_base_url);
        let place: NominatimPlace = self
            .get_json(
                &url,
                &[
                    ("format", "jsonv2".into()),
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                ],
            )
            .await?;
        Ok(Location::from_nominatim(&place))
    }

    /// Approximate location of the caller's public IP.
    pub async fn ip_lookup(&self) -> Result<IpLocation, ApiError> {
        self.get_json(&self.ip_lookup_url, &[]).await
    }

    /// Resolve the user's location: reverse-geocode device coordinates when
    /// available, otherwise (or when that fails) approximate from the IP
    /// address, overlaid on `prev`.
    pub async fn locate(
        &self,
        device: Option<(f64, f64)>,
        prev: &Location,
    ) -> Result<ResolvedLocation, ApiError> {
        if let Some((lat, lon)) = device {
            match self.reverse(lat, lon).await {
                Ok(location) => {
                    return Ok(ResolvedLocation {
                        location,
                        source: LocationSource::Device,
                    });
                }
                Err(err) => warn!(error = %err, "reverse geocoding failed, falling back to IP lookup"),
            }
        }
        let ip = self.ip_lookup().await?;
        Ok(ResolvedLocation {
            location: prev.merge_ip(&ip),
            source: LocationSource::IpApproximation,
        })
    }

    /// Resolve a typed address. `None` when the geocoder has no match.
    pub async fn resolve_address(&self, address: &str) -> Result<Option<ResolvedLocation>, ApiError> {
        Ok(self.forward(address).await?.map(|location| ResolvedLocation {
            location,
            source: LocationSource::Address,
        }))
    }
}
