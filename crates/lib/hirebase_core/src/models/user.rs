//! User models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Company;

/// The signed-in user's profile (`GET /api/auth/profile`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub skipped_company_info: bool,
    pub referral_id: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub referral_count: u64,
    pub referred_by: Option<UserRef>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub referred_users: Vec<UserRef>,
    pub company: Option<Company>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Name/email/referral triple used in referral listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub name: Option<String>,
    pub email: Option<String>,
    pub referral_id: Option<String>,
}

/// Contact details embedded in admin tables and listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLite {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Row of the admin user list (`GET /api/auth/users`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub is_admin: bool,
    pub referral_id: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub referral_count: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Editable profile fields (`PUT /api/auth/profile`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_company_info: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub users: Vec<AdminUser>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn profile_decodes_with_sparse_fields() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": "u1",
            "email": "a@example.com",
            "isAdmin": true,
            "referredBy": null,
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(profile.id, "u1");
        assert!(profile.is_admin);
        assert!(profile.referred_by.is_none());
        assert!(profile.referred_users.is_empty());
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            phone: Some("999".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({ "phone": "999" }));
    }
}
