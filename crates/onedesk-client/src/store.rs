//! Persisted session storage for the token and cached avatar URL.
//!
//! # Purpose
//! Abstracts where the session token lives so the session layer can run
//! against in-memory state in tests and a JSON file on disk in real use.
//!
//! # Key invariants
//! - Reads never fail; a missing or unreadable backing file behaves as an
//!   empty store.
//! - Writes degrade: a failed flush keeps the in-memory value and logs a
//!   warning rather than surfacing an error to the session flow.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
    fn picture(&self) -> Option<String>;
    fn set_picture(&self, url: &str);
    fn clear_picture(&self);
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

// Session values stay meaningful even if a writer panicked mid-update.
fn read_guard(lock: &RwLock<StoredSession>) -> RwLockReadGuard<'_, StoredSession> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_guard(lock: &RwLock<StoredSession>) -> RwLockWriteGuard<'_, StoredSession> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Volatile store used by tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<StoredSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        read_guard(&self.inner).token.clone()
    }

    fn set_token(&self, token: &str) {
        write_guard(&self.inner).token = Some(token.to_string());
    }

    fn clear_token(&self) {
        write_guard(&self.inner).token = None;
    }

    fn picture(&self) -> Option<String> {
        read_guard(&self.inner).picture.clone()
    }

    fn set_picture(&self, url: &str) {
        write_guard(&self.inner).picture = Some(url.to_string());
    }

    fn clear_picture(&self) {
        write_guard(&self.inner).picture = None;
    }
}

/// JSON-file-backed store, the desktop analog of browser local storage.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    inner: RwLock<StoredSession>,
}

impl FileSessionStore {
    /// Open the store, loading any existing session file.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let stored = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "session file unreadable; starting empty");
                StoredSession::default()
            }),
            Err(_) => StoredSession::default(),
        };
        Self {
            path,
            inner: RwLock::new(stored),
        }
    }

    fn mutate(&self, apply: impl FnOnce(&mut StoredSession)) {
        let mut guard = write_guard(&self.inner);
        apply(&mut guard);
        let serialized = match serde_json::to_string_pretty(&*guard) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "session serialization failed; keeping in-memory state");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %err, "session flush failed; keeping in-memory state");
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        read_guard(&self.inner).token.clone()
    }

    fn set_token(&self, token: &str) {
        self.mutate(|stored| stored.token = Some(token.to_string()));
    }

    fn clear_token(&self) {
        self.mutate(|stored| stored.token = None);
    }

    fn picture(&self) -> Option<String> {
        read_guard(&self.inner).picture.clone()
    }

    fn set_picture(&self, url: &str) {
        self.mutate(|stored| stored.picture = Some(url.to_string()));
    }

    fn clear_picture(&self) {
        self.mutate(|stored| stored.picture = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);
        store.set_token("tok-1");
        store.set_picture("https://cdn.example/p.png");
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        store.clear_token();
        assert_eq!(store.token(), None);
        assert_eq!(store.picture().as_deref(), Some("https://cdn.example/p.png"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.set_token("tok-2");
        store.set_picture("https://cdn.example/me.png");

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("tok-2"));
        assert_eq!(
            reopened.picture().as_deref(),
            Some("https://cdn.example/me.png")
        );

        reopened.clear_token();
        let again = FileSessionStore::open(&path);
        assert_eq!(again.token(), None);
        assert_eq!(again.picture().as_deref(), Some("https://cdn.example/me.png"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").expect("write corrupt file");
        let store = FileSessionStore::open(&path);
        assert_eq!(store.token(), None);
    }
}
