//! Company models.

use serde::{Deserialize, Serialize};

use crate::geo::Location;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    pub website: Option<String>,
    pub about: Option<String>,
    pub logo: Option<String>,
}

/// Body for creating or updating a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    pub name: String,
    pub location: Location,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub about: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub logo: String,
}

impl CompanyInput {
    /// A company needs a name and every location field except the pincode.
    pub fn is_complete(&self) -> bool {
        let l = &self.location;
        ![
            &self.name,
            &l.address,
            &l.country,
            &l.state,
            &l.city,
            &l.district,
        ]
        .iter()
        .any(|v| v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompaniesData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyData {
    pub company: Company,
}
