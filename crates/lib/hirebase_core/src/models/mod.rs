//! Typed response schemas for the marketplace API.
//!
//! Every backend response is decoded into these types at the client
//! boundary. The backend speaks camelCase with Mongo-style `_id` keys; the
//! serde attributes below map that onto Rust names. Optional backend fields
//! are `Option` (or defaulted collections), so a schema change that drops a
//! required field becomes a decode error instead of a silently blank view.

pub mod billing;
pub mod company;
pub mod listing;
pub mod referral;
pub mod user;

use serde::{Deserialize, Deserializer, Serialize};

pub use billing::*;
pub use company::*;
pub use listing::*;
pub use referral::*;
pub use user::*;

/// Standard `{ status, results, data, meta }` response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Option<u64>,
    pub data: T,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl<T> Envelope<T> {
    /// Total item count reported by server-side pagination, `0` when absent.
    pub fn total(&self) -> u64 {
        self.meta
            .as_ref()
            .and_then(|m| m.pagination.as_ref())
            .and_then(|p| p.total)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// A reference the backend sends either as a bare id or as the populated
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Id(String),
    Doc(T),
}

impl<T> Populated<T> {
    /// The populated document, if the backend expanded the reference.
    pub fn doc(&self) -> Option<&T> {
        match self {
            Populated::Doc(doc) => Some(doc),
            Populated::Id(_) => None,
        }
    }
}

/// Decodes an explicit `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_total_reads_pagination() {
        let env: Envelope<serde_json::Value> = serde_json::from_value(json!({
            "status": "success",
            "data": {},
            "meta": { "pagination": { "total": 14, "page": 1, "limit": 6 } }
        }))
        .unwrap();
        assert_eq!(env.total(), 14);
    }

    #[test]
    fn envelope_total_defaults_to_zero() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "data": null })).unwrap();
        assert_eq!(env.total(), 0);
    }

    #[test]
    fn populated_accepts_id_or_document() {
        let id: Populated<UserLite> = serde_json::from_value(json!("64fa")).unwrap();
        assert_eq!(id, Populated::Id("64fa".into()));
        assert!(id.doc().is_none());

        let doc: Populated<UserLite> =
            serde_json::from_value(json!({ "_id": "64fa", "name": "Asha" })).unwrap();
        assert_eq!(doc.doc().and_then(|u| u.name.as_deref()), Some("Asha"));
    }

    #[test]
    fn null_numbers_decode_as_zero() {
        let rows: Vec<WithdrawalRequest> = serde_json::from_value(json!([
            { "_id": "w1", "amount": 500, "status": "requested", "paidAmount": null },
            { "_id": "w2", "amount": null, "status": "paid" }
        ]))
        .unwrap();
        assert_eq!(rows[0].amount, 500.0);
        assert_eq!(rows[0].paid_amount, 0.0);
        assert_eq!(rows[1].amount, 0.0);
        assert_eq!(rows[1].remaining(), 0.0);

        let data: WithdrawalsData =
            serde_json::from_value(json!({ "requests": null })).unwrap();
        assert!(data.requests.is_empty());
    }

    #[test]
    fn missing_data_is_a_decode_error() {
        let res: Result<Envelope<ServicesData>, _> =
            serde_json::from_value(json!({ "status": "success" }));
        assert!(res.is_err());
    }
}
