//! File-backed key-value storage for the persisted session blob.
//!
//! Each key maps to one JSON file inside the storage directory. The client
//! only ever uses the single key [`SESSION_KEY`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::context::Session;

/// Key under which the session blob is stored.
pub const SESSION_KEY: &str = "session";

/// Errors from reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupted entry '{path}': {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory of JSON entries keyed by name.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    dir: PathBuf,
}

impl SessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read an entry. A missing entry is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.entry_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StorageError::Corrupted { path, source })
    }

    /// Write an entry, replacing any previous value.
    ///
    /// Writes to a sibling temp file first and renames it into place so a
    /// crash never leaves a half-written blob behind.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.entry_path(key);
        let content = serde_json::to_vec_pretty(value).map_err(|source| {
            StorageError::Corrupted {
                path: path.clone(),
                source,
            }
        })?;

        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, content).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }

    /// Delete an entry. Deleting a missing entry is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    pub fn load_session(&self) -> Result<Option<Session>, StorageError> {
        self.get(SESSION_KEY)
    }

    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        self.set(SESSION_KEY, session)
    }

    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.remove(SESSION_KEY)
    }
}
