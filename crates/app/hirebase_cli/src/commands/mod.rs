//! Command handlers. Each one plays the part of a dashboard view: it runs the
//! view's guard, calls the API and prints what the view would show.

pub mod account;
pub mod admin;
pub mod listings;
pub mod locate;
pub mod session;

use hirebase_api_client::{Client, GeoClient};
use hirebase_core::config::ClientConfig;
use hirebase_core::guard::{self, GuardDecision};
use hirebase_core::session::{FileStore, Session};

use crate::cli::Cli;
use crate::{Error, Result};

/// Resolved configuration and the persisted session.
pub struct Context {
    pub config: ClientConfig,
    pub session: Session,
}

impl Context {
    pub fn new(args: &Cli) -> Result<Self> {
        let mut config = ClientConfig::from_env()?;
        if let Some(base) = &args.api_base {
            config = config.with_api_base(base);
        }
        if let Some(path) = &args.session_file {
            config.session_file = path.clone();
        }
        log::debug!("session file: {}", config.session_file.display());
        let session = Session::new(FileStore::new(config.session_file.clone()));
        Ok(Self { config, session })
    }

    pub fn client(&self) -> Result<Client> {
        Ok(Client::new(&self.config, self.session.clone())?)
    }

    pub fn geo(&self) -> Result<GeoClient> {
        Ok(GeoClient::new(&self.config)?)
    }

    /// Guard for signed-in views.
    pub fn require_authenticated(&self) -> Result<()> {
        allow(guard::require_authenticated(&self.session))
    }

    /// Guard for admin views.
    pub fn require_admin(&self) -> Result<()> {
        allow(guard::require_admin(&self.session))
    }
}

fn allow(decision: GuardDecision) -> Result<()> {
    match decision {
        GuardDecision::Render => Ok(()),
        GuardDecision::Redirect { to, .. } => Err(Error::Redirect(to)),
    }
}

/// `-` for missing values in printed tables.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_redirect_becomes_error() {
        assert!(allow(GuardDecision::Render).is_ok());
        let err = allow(GuardDecision::Redirect {
            to: "/signin",
            replace: true,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Not authorized, redirecting to /signin");
    }

    #[test]
    fn dash_for_blank_values() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("Asha")), "Asha");
    }
}
