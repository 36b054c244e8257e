use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Which backend deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an environment name. Accepts the short forms `dev` and `prod`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// Backend API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Active deployment; selects between the two base URLs below.
    #[serde(default)]
    pub environment: Environment,
    /// Base URL used in development (e.g., "http://localhost:3000/api").
    #[serde(default = "default_development_url")]
    pub development_url: String,
    /// Base URL used in production.
    #[serde(default = "default_production_url")]
    pub production_url: String,
    /// Explicit base URL. Takes precedence over the environment selection.
    #[serde(default)]
    pub base_url_override: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Posts requested per feed page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Local session persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Directory holding the persisted session blob.
    /// Defaults to `<data_dir>/ripple` when unset.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

fn default_development_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_production_url() -> String {
    "https://api.ripple.social/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> u32 {
    10
}

impl ApiConfig {
    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        if let Some(ref url) = self.base_url_override {
            return url;
        }
        match self.environment {
            Environment::Development => &self.development_url,
            Environment::Production => &self.production_url,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            development_url: default_development_url(),
            production_url: default_production_url(),
            base_url_override: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl SessionConfig {
    /// Resolve the storage directory, falling back to the platform data dir.
    pub fn resolved_dir(&self) -> PathBuf {
        match self.storage_dir {
            Some(ref dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ripple"),
        }
    }
}
