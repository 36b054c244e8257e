//! Shared configuration snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::{Config, Environment};

/// Configuration shared between the client and the screens that read it.
///
/// Readers get a snapshot; command-line overrides are applied on top of the
/// file once, when the store is opened.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn open(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(Config::config_path);
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    /// Pin the environment regardless of what the file or `RIPPLE_ENV` say.
    pub fn with_environment(self, environment: Option<Environment>) -> Self {
        if let Some(env) = environment {
            self.inner.write().api.environment = env;
        }
        self
    }

    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
