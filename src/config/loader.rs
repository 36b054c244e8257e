use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, Environment};

/// Environment variable selecting the deployment (`development` / `production`).
pub const ENV_VAR: &str = "RIPPLE_ENV";
/// Environment variable forcing an explicit base URL.
pub const BASE_URL_VAR: &str = "RIPPLE_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config dir>/ripple/config.toml`, or `./ripple/config.toml` when the
    /// platform has no config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ripple")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read `path` (defaults when absent), apply `RIPPLE_ENV` and
    /// `RIPPLE_BASE_URL`, then validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = match read_file(path)? {
            Some(content) => toml::from_str(&content).map_err(|source| {
                ConfigError::ParseError {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            None => Config::default(),
        };

        config.apply_env_overrides(
            std::env::var(ENV_VAR).ok().as_deref(),
            std::env::var(BASE_URL_VAR).ok().as_deref(),
        )?;
        config.validate()?;
        Ok(config)
    }

    /// Apply an environment name and an explicit base URL. Blank values are
    /// ignored.
    pub fn apply_env_overrides(
        &mut self,
        environment: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(name) = environment.filter(|v| !v.trim().is_empty()) {
            self.api.environment =
                Environment::parse(name).ok_or_else(|| ConfigError::ValidationError {
                    message: format!("Unknown environment '{}'", name),
                })?;
        }
        if let Some(url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url_override = Some(url.trim().to_string());
        }
        Ok(())
    }

    /// The selected base URL must be absolute http(s); timeouts and page
    /// size must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url();
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::ValidationError {
                    message: format!("Base URL '{}' is not a valid http(s) URL", base_url),
                })
            }
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.api.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "page_size must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn read_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}
