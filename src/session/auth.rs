//! Authentication header building for API requests.

use super::context::SessionContext;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for the current session.
///
/// Returns `None` when no token is held.
pub fn build_auth_header(session: &SessionContext) -> Option<AuthHeader> {
    session.token().map(|token| {
        (
            "Authorization".to_string(),
            format!("Bearer {}", token.expose()),
        )
    })
}
