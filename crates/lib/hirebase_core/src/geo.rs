//! Location handling: geocoder payloads, IP fallback merge and search
//! query construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Postal location attached to services, jobs and companies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

impl Location {
    /// Listings require every field.
    pub fn is_complete(&self) -> bool {
        [
            &self.address,
            &self.country,
            &self.state,
            &self.city,
            &self.district,
            &self.pincode,
        ]
        .iter()
        .all(|v| !v.trim().is_empty())
    }

    /// Build a location from a Nominatim search/reverse result.
    pub fn from_nominatim(place: &NominatimPlace) -> Self {
        let a = &place.address;
        let city = first_non_empty(&[&a.city, &a.town, &a.village]);
        let district = first_non_empty(&[&a.state_district, &a.county, &a.district]);
        let state = a.state.clone().unwrap_or_default();
        let country = a.country.clone().unwrap_or_default();
        let pincode = a.postcode.clone().unwrap_or_default();

        let address = match place.display_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => join_non_empty(&[
                a.house_number.as_deref().unwrap_or_default(),
                a.road.as_deref().unwrap_or_default(),
                a.suburb.as_deref().unwrap_or_default(),
                city.as_str(),
                district.as_str(),
                state.as_str(),
                country.as_str(),
                pincode.as_str(),
            ]),
        };

        Self {
            address,
            city,
            district,
            state,
            country,
            pincode,
        }
    }

    /// Overlay an IP-based approximation on `self`, keeping existing values
    /// wherever the lookup has nothing. The district is never known from IP.
    pub fn merge_ip(&self, ip: &IpLocation) -> Self {
        let pick = |ip_val: &Option<String>, prev: &str| match ip_val.as_deref() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => prev.to_string(),
        };
        let joined = join_non_empty(&[
            ip.city.as_deref().unwrap_or_default(),
            ip.region.as_deref().unwrap_or_default(),
            ip.country_name.as_deref().unwrap_or_default(),
            ip.postal.as_deref().unwrap_or_default(),
        ]);
        Self {
            address: if joined.is_empty() {
                self.address.clone()
            } else {
                joined
            },
            city: pick(&ip.city, &self.city),
            district: self.district.clone(),
            state: pick(&ip.region, &self.state),
            country: pick(&ip.country_name, &self.country),
            pincode: pick(&ip.postal, &self.pincode),
        }
    }
}

fn first_non_empty(values: &[&Option<String>]) -> String {
    values
        .iter()
        .filter_map(|v| v.as_deref())
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Nominatim `jsonv2` result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: NominatimAddress,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NominatimAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state_district: Option<String>,
    pub county: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

/// `ipapi.co` style response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IpLocation {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub postal: Option<String>,
}

/// Where a resolved location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    /// Reverse-geocoded device coordinates.
    Device,
    /// Forward-geocoded address text.
    Address,
    /// Approximated from the caller's IP address.
    IpApproximation,
}

/// A location together with its provenance, so callers can tell the user
/// when it is only an approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: Location,
    pub source: LocationSource,
}

impl ResolvedLocation {
    pub fn is_approximate(&self) -> bool {
        self.source == LocationSource::IpApproximation
    }
}

/// Search input errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter a keyword or address.")]
    MissingKeyword,
}

/// Which job listings a search targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    Private,
    /// One of [`crate::models::GOVERNMENT_JOB_TYPES`].
    Government(String),
}

/// Keyword + location search, shared by service and job search.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: Location,
}

impl SearchQuery {
    /// The trimmed keyword, or the trimmed address when no keyword was given.
    pub fn effective_keyword(&self) -> Result<String, SearchError> {
        let keyword = self.keyword.trim();
        let keyword = if keyword.is_empty() {
            self.location.address.trim()
        } else {
            keyword
        };
        if keyword.is_empty() {
            Err(SearchError::MissingKeyword)
        } else {
            Ok(keyword.to_string())
        }
    }

    /// Query pairs for location-aware search endpoints.
    pub fn to_pairs(&self) -> Result<Vec<(String, String)>, SearchError> {
        let mut pairs = vec![("keyword".to_string(), self.effective_keyword()?)];
        let l = &self.location;
        for (key, value) in [
            ("city", &l.city),
            ("district", &l.district),
            ("state", &l.state),
            ("country", &l.country),
            ("pincode", &l.pincode),
        ] {
            if !value.is_empty() {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        Ok(pairs)
    }

    /// Query pairs for a job search. Government searches filter by job type
    /// and ignore the location.
    pub fn job_pairs(&self, kind: &JobKind) -> Result<Vec<(String, String)>, SearchError> {
        match kind {
            JobKind::Private => self.to_pairs(),
            JobKind::Government(job_type) => Ok(vec![
                ("keyword".to_string(), self.effective_keyword()?),
                ("jobType".to_string(), job_type.clone()),
            ]),
        }
    }
}

/// Query pairs for the candidate search; no categories means no filter.
pub fn candidate_pairs(category_ids: &[String]) -> Vec<(String, String)> {
    if category_ids.is_empty() {
        Vec::new()
    } else {
        vec![("categoryIds".to_string(), category_ids.join(","))]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nominatim_prefers_city_then_town_then_village() {
        let place: NominatimPlace = serde_json::from_value(json!({
            "display_name": "Somewhere, Kerala, India",
            "address": {
                "village": "Kumily",
                "county": "Idukki",
                "state": "Kerala",
                "country": "India",
                "postcode": "685509"
            }
        }))
        .unwrap();
        let loc = Location::from_nominatim(&place);
        assert_eq!(loc.city, "Kumily");
        assert_eq!(loc.district, "Idukki");
        assert_eq!(loc.address, "Somewhere, Kerala, India");
        assert!(loc.is_complete());
    }

    #[test]
    fn nominatim_builds_address_when_display_name_missing() {
        let place: NominatimPlace = serde_json::from_value(json!({
            "address": { "road": "MG Road", "city": "Kochi", "country": "India" }
        }))
        .unwrap();
        let loc = Location::from_nominatim(&place);
        assert_eq!(loc.address, "MG Road, Kochi, India");
    }

    #[test]
    fn ip_merge_keeps_previous_values_where_missing() {
        let prev = Location {
            address: "old".into(),
            district: "Ernakulam".into(),
            pincode: "682001".into(),
            ..Default::default()
        };
        let ip = IpLocation {
            city: Some("Kochi".into()),
            region: Some("Kerala".into()),
            country_name: Some("India".into()),
            postal: None,
        };
        let merged = prev.merge_ip(&ip);
        assert_eq!(merged.address, "Kochi, Kerala, India");
        assert_eq!(merged.city, "Kochi");
        assert_eq!(merged.district, "Ernakulam");
        assert_eq!(merged.pincode, "682001");
    }

    #[test]
    fn empty_ip_lookup_keeps_previous_address() {
        let prev = Location {
            address: "typed by hand".into(),
            ..Default::default()
        };
        assert_eq!(prev.merge_ip(&IpLocation::default()).address, "typed by hand");
    }

    #[test]
    fn keyword_falls_back_to_address() {
        let q = SearchQuery {
            keyword: "  ".into(),
            location: Location {
                address: " Pune ".into(),
                ..Default::default()
            },
        };
        assert_eq!(q.effective_keyword().unwrap(), "Pune");
    }

    #[test]
    fn empty_search_is_rejected() {
        let q = SearchQuery::default();
        assert_eq!(q.to_pairs().unwrap_err(), SearchError::MissingKeyword);
    }

    #[test]
    fn pairs_include_only_filled_location_fields() {
        let q = SearchQuery {
            keyword: "plumber".into(),
            location: Location {
                city: "Pune".into(),
                pincode: "411001".into(),
                ..Default::default()
            },
        };
        let pairs = q.to_pairs().unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["keyword", "city", "pincode"]);
    }

    #[test]
    fn government_search_uses_job_type_not_location() {
        let q = SearchQuery {
            keyword: "clerk".into(),
            location: Location {
                city: "Delhi".into(),
                ..Default::default()
            },
        };
        let pairs = q.job_pairs(&JobKind::Government("PSU Jobs".into())).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("keyword".to_string(), "clerk".to_string()),
                ("jobType".to_string(), "PSU Jobs".to_string()),
            ]
        );
    }

    #[test]
    fn candidate_pairs_join_ids() {
        assert!(candidate_pairs(&[]).is_empty());
        assert_eq!(
            candidate_pairs(&["a".into(), "b".into()]),
            vec![("categoryIds".to_string(), "a,b".to_string())]
        );
    }
}
