//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;

use ripple::api::ApiClient;
use ripple::config::ApiConfig;
use ripple::repository::Repositories;
use ripple::session::{SecureString, Session, SessionContext, SessionUser};
use serde_json::{json, Value};
use tempfile::TempDir;

use mock_backend::MockBackend;

pub const TOKEN: &str = "tok-123";

pub fn session_user() -> SessionUser {
    SessionUser {
        id: "u1".to_string(),
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        avatar: None,
    }
}

pub fn signed_in() -> SessionContext {
    SessionContext::signed_in(Session {
        token: SecureString::new(TOKEN),
        user: session_user(),
    })
}

pub fn api_config(backend: &MockBackend) -> ApiConfig {
    ApiConfig {
        base_url_override: Some(backend.base_url()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        page_size: 2,
        ..ApiConfig::default()
    }
}

pub fn client(backend: &MockBackend, session: SessionContext) -> ApiClient {
    ApiClient::new(&api_config(backend), session).expect("client")
}

pub fn repositories(backend: &MockBackend, session: SessionContext) -> Repositories {
    Repositories::new(client(backend, session), &api_config(backend))
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({ "_id": id, "username": username, "email": format!("{}@example.com", username) })
}

pub fn post_json(id: &str) -> Value {
    json!({
        "_id": id,
        "author": user_json("u2", "luis"),
        "content": format!("post {}", id),
        "likesCount": 1,
        "commentsCount": 0
    })
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
