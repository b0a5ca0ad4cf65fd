//! # hirebase_core
//!
//! Session state, route guards and the display-side domain logic for the
//! Hirebase marketplace dashboard. Nothing in here performs I/O against the
//! backend; see `hirebase_api_client` for that.

pub mod config;
pub mod export;
pub mod finance;
pub mod geo;
pub mod guard;
pub mod models;
pub mod paging;
pub mod referral;
pub mod routes;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
