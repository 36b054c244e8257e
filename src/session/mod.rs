//! Session management.
//!
//! The bearer token lives in a [`SessionContext`] that is handed to the API
//! client at construction time, and is mirrored to a single JSON blob on disk
//! so a restart keeps the user signed in.

mod auth;
mod context;
mod credentials;
mod storage;

pub use auth::{build_auth_header, AuthHeader};
pub use context::{Session, SessionContext, SessionUser};
pub use credentials::SecureString;
pub use storage::{SessionStorage, StorageError, SESSION_KEY};
