//! Error taxonomy for everything that crosses the backend boundary.
//!
//! Every repository call yields an [`ApiError`] on failure; view-models
//! dispatch on the variant (or its [`ErrorKind`]) rather than on message text.

use thiserror::Error;

/// Form field a validation or auth error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Username,
    Email,
    Password,
    NewPassword,
    ConfirmPassword,
    Content,
    General,
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected client-side before any request was made.
    Validation,
    /// Missing or rejected credentials.
    Auth,
    /// Connectivity or timeout.
    Network,
    /// Non-2xx response or an envelope with `success: false`.
    Server,
    /// Response shape did not match what the operation expects.
    Decode,
}

/// Failure of a backend operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected locally; no request was sent.
    #[error("{message}")]
    Validation { field: Field, message: String },

    /// The operation needs a session and none is held.
    #[error("No autenticado")]
    Unauthenticated,

    /// Server answered 401 or 403.
    #[error("{message}")]
    Unauthorized { status: u16, message: String },

    /// Server answered 404.
    #[error("{message}")]
    NotFound { message: String },

    /// Any other server-reported failure.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response.
    #[error("Error de conexión: {message}")]
    Connection { message: String },

    /// The response body could not be decoded.
    #[error("Respuesta del servidor no válida")]
    Decode { detail: String },
}

/// Outcome of a repository call.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(field: Field, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::Unauthenticated | ApiError::Unauthorized { .. } => ErrorKind::Auth,
            ApiError::Connection { .. } => ErrorKind::Network,
            ApiError::NotFound { .. } | ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status the error came from, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::Server { status, .. } => {
                Some(*status)
            }
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// The message is taken from the body's `message` or `error` field, then
    /// from a short plain-text body, then falls back to the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message =
            extract_message(body).unwrap_or_else(|| format!("La solicitud falló: {}", status));
        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Server { status, message },
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let candidate = value
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| value.get("error").and_then(|e| e.as_str()))
            .or_else(|| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
            });
        return candidate
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
    }

    // Plain text is only useful when it is short and not an HTML error page.
    if trimmed.starts_with('<') || trimmed.chars().count() > 200 {
        return None;
    }
    Some(trimmed.to_string())
}
