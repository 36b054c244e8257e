//! Client configuration: backend selection, timeouts, session storage.

mod loader;
mod store;
mod types;

pub use loader::{ConfigError, BASE_URL_VAR, ENV_VAR};
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, Environment, SessionConfig};
