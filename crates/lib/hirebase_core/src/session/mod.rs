//! Session state: bearer token and admin flag.
//!
//! The session is an explicit handle passed to every consumer (API client,
//! guards, CLI commands) rather than ambient global state. The backing store
//! is pluggable: [`MemoryStore`] for tests and embedding, [`FileStore`] for
//! the CLI.
//!
//! Values are stored verbatim: no validation, no encryption and no expiry.
//! An expired token is only discovered when a request fails.

pub mod file;
pub mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the admin flag.
pub const ADMIN_KEY: &str = "isAdmin";

/// The only value of [`ADMIN_KEY`] that grants admin access.
pub const ADMIN_SENTINEL: &str = "true";

/// Session storage errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Session storage lock poisoned")]
    Poisoned,
}

/// Durable string key/value store backing a [`Session`].
pub trait SessionStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Overwrites `key` unconditionally.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Cheaply clonable handle over a shared [`SessionStore`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new<S>(store: S) -> Self
    where
        S: SessionStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.store.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.set(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) -> Result<(), SessionError> {
        self.store.remove(TOKEN_KEY)
    }

    /// `true` only when the stored flag is exactly [`ADMIN_SENTINEL`].
    ///
    /// The flag is trusted at face value; nothing re-verifies it with the
    /// backend.
    pub fn is_admin(&self) -> Result<bool, SessionError> {
        Ok(self.store.get(ADMIN_KEY)?.as_deref() == Some(ADMIN_SENTINEL))
    }

    pub fn set_admin(&self, is_admin: bool) -> Result<(), SessionError> {
        if is_admin {
            self.store.set(ADMIN_KEY, ADMIN_SENTINEL)
        } else {
            self.store.remove(ADMIN_KEY)
        }
    }

    /// Persist a freshly issued token together with the admin flag.
    pub fn sign_in(&self, token: &str, is_admin: bool) -> Result<(), SessionError> {
        self.set_token(token)?;
        self.set_admin(is_admin)
    }

    /// Forget both the token and the admin flag.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.clear_token()?;
        self.store.remove(ADMIN_KEY)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_token() {
        let session = Session::in_memory();
        session.set_token("abc").unwrap();
        assert_eq!(session.token().unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn clear_then_get_returns_none() {
        let session = Session::in_memory();
        session.set_token("abc").unwrap();
        session.clear_token().unwrap();
        assert!(session.token().unwrap().is_none());
    }

    #[test]
    fn set_overwrites() {
        let session = Session::in_memory();
        session.set_token("first").unwrap();
        session.set_token("second").unwrap();
        assert_eq!(session.token().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn admin_flag_requires_exact_sentinel() {
        let store = MemoryStore::new();
        store.set(ADMIN_KEY, "TRUE").unwrap();
        let session = Session::new(store);
        assert!(!session.is_admin().unwrap());

        session.set_admin(true).unwrap();
        assert!(session.is_admin().unwrap());

        session.set_admin(false).unwrap();
        assert!(!session.is_admin().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::in_memory();
        let other = session.clone();
        other.sign_in("shared", true).unwrap();
        assert_eq!(session.token().unwrap().as_deref(), Some("shared"));
        assert!(session.is_admin().unwrap());
    }

    #[test]
    fn sign_out_clears_everything() {
        let session = Session::in_memory();
        session.sign_in("t", true).unwrap();
        session.sign_out().unwrap();
        assert!(session.token().unwrap().is_none());
        assert!(!session.is_admin().unwrap());
    }
}
