//! JSON-file session store.
//!
//! The whole store is a single JSON object (`{"token": "...", "isAdmin": "true"}`)
//! rewritten on every mutation. A missing file reads as an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SessionError, SessionStore};

/// [`SessionStore`] persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "session file written");
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, TOKEN_KEY};

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));
        assert!(store.get(TOKEN_KEY).unwrap().is_none());
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        Session::new(FileStore::new(&path))
            .sign_in("persisted", true)
            .unwrap();

        let reopened = Session::new(FileStore::new(&path));
        assert_eq!(reopened.token().unwrap().as_deref(), Some("persisted"));
        assert!(reopened.is_admin().unwrap());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let err = FileStore::new(&path).get(TOKEN_KEY).unwrap_err();
        assert!(matches!(err, SessionError::Corrupt(_)));
    }

    #[test]
    fn sign_out_removes_keys_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = Session::new(FileStore::new(&path));
        session.sign_in("t", false).unwrap();
        session.sign_out().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "{}");
    }
}
