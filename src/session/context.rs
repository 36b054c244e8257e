use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::credentials::SecureString;
use super::storage::{SessionStorage, StorageError};

/// Minimal user info kept alongside the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// An authenticated session: bearer token plus who it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: SecureString,
    pub user: SessionUser,
}

/// Shared, explicitly injected session state.
///
/// Cloning is cheap; all clones observe the same session. When constructed
/// with a [`SessionStorage`], sign-in and sign-out are mirrored to disk.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<Session>>>,
    storage: Option<SessionStorage>,
}

impl SessionContext {
    /// Session context backed by persistent storage.
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            storage: Some(storage),
        }
    }

    /// Session context that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// In-memory context already signed in with `session`.
    pub fn signed_in(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
            storage: None,
        }
    }

    /// Load a previously persisted session, if any.
    ///
    /// Returns whether a session was restored.
    pub fn restore(&self) -> Result<bool, StorageError> {
        let Some(ref storage) = self.storage else {
            return Ok(false);
        };
        let restored = storage.load_session()?;
        let found = restored.is_some();
        if let Some(ref session) = restored {
            tracing::info!(user = %session.user.username, "Restored persisted session");
        }
        *self.inner.write() = restored;
        Ok(found)
    }

    /// Store a freshly issued session.
    ///
    /// A failure to persist is logged and otherwise ignored: the session
    /// stays valid for this process.
    pub fn sign_in(&self, session: Session) {
        if let Some(ref storage) = self.storage {
            if let Err(e) = storage.save_session(&session) {
                tracing::warn!("Failed to persist session: {}", e);
            }
        }
        tracing::info!(user = %session.user.username, "Signed in");
        *self.inner.write() = Some(session);
    }

    /// Drop the session and its persisted copy.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        let previous = self.inner.write().take();
        if let Some(session) = previous {
            tracing::info!(user = %session.user.username, "Signed out");
        }
        match self.storage {
            Some(ref storage) => storage.clear_session(),
            None => Ok(()),
        }
    }

    pub fn token(&self) -> Option<SecureString> {
        self.inner
            .read()
            .as_ref()
            .map(|s| s.token.clone())
            .filter(|t| !t.is_empty())
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.user.id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
