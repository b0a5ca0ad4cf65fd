//! Route guards. Decide whether a protected view may render.
//!
//! Both guards are pure functions of the session state: they never touch the
//! network, so a stale or tampered admin flag is trusted until the first API
//! call fails.

use tracing::warn;

use crate::session::Session;

/// Sign-in view.
pub const SIGN_IN_PATH: &str = "/signin";

/// Home view.
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content.
    Render,
    /// Navigate elsewhere. `replace` means the current history entry is
    /// replaced so back-navigation does not loop through the guard.
    Redirect { to: &'static str, replace: bool },
}

impl GuardDecision {
    fn redirect(to: &'static str) -> Self {
        Self::Redirect { to, replace: true }
    }
}

/// Render only when a token is present.
pub fn require_authenticated(session: &Session) -> GuardDecision {
    if has_token(session) {
        GuardDecision::Render
    } else {
        GuardDecision::redirect(SIGN_IN_PATH)
    }
}

/// Render only when a token is present and the admin flag is `"true"`.
pub fn require_admin(session: &Session) -> GuardDecision {
    if !has_token(session) {
        return GuardDecision::redirect(SIGN_IN_PATH);
    }
    match session.is_admin() {
        Ok(true) => GuardDecision::Render,
        Ok(false) => GuardDecision::redirect(HOME_PATH),
        Err(e) => {
            warn!(error = %e, "session unreadable, treating as non-admin");
            GuardDecision::redirect(HOME_PATH)
        }
    }
}

// An unreadable store or an empty token counts as signed out.
fn has_token(session: &Session) -> bool {
    match session.token() {
        Ok(token) => token.is_some_and(|t| !t.is_empty()),
        Err(e) => {
            warn!(error = %e, "session unreadable, treating as signed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionError, SessionStore};

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
            Err(SessionError::Poisoned)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
            Err(SessionError::Poisoned)
        }
        fn remove(&self, _key: &str) -> Result<(), SessionError> {
            Err(SessionError::Poisoned)
        }
    }

    fn signin() -> GuardDecision {
        GuardDecision::Redirect {
            to: "/signin",
            replace: true,
        }
    }

    #[test]
    fn authenticated_without_token_redirects_to_signin() {
        let session = Session::in_memory();
        assert_eq!(require_authenticated(&session), signin());
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let session = Session::in_memory();
        session.set_token("").unwrap();
        session.set_admin(true).unwrap();
        assert_eq!(require_authenticated(&session), signin());
        assert_eq!(require_admin(&session), signin());
    }

    #[test]
    fn authenticated_with_token_renders() {
        let session = Session::in_memory();
        session.set_token("t").unwrap();
        assert_eq!(require_authenticated(&session), GuardDecision::Render);
        // Repeated evaluation yields the same answer and changes nothing.
        assert_eq!(require_authenticated(&session), GuardDecision::Render);
        assert_eq!(session.token().unwrap().as_deref(), Some("t"));
    }

    #[test]
    fn admin_without_token_redirects_to_signin() {
        let session = Session::in_memory();
        session.set_admin(true).unwrap();
        assert_eq!(require_admin(&session), signin());
    }

    #[test]
    fn admin_with_token_but_no_flag_redirects_home() {
        let session = Session::in_memory();
        session.set_token("t").unwrap();
        assert_eq!(
            require_admin(&session),
            GuardDecision::Redirect {
                to: "/",
                replace: true
            }
        );
    }

    #[test]
    fn admin_with_token_and_flag_renders() {
        let session = Session::in_memory();
        session.sign_in("t", true).unwrap();
        assert_eq!(require_admin(&session), GuardDecision::Render);
    }

    #[test]
    fn broken_storage_degrades_to_signin() {
        let session = Session::new(BrokenStore);
        assert_eq!(require_authenticated(&session), signin());
        assert_eq!(require_admin(&session), signin());
    }
}
