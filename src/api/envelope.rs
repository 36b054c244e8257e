//! The `{success, message, data}` wrapper around every backend response.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

fn default_success() -> bool {
    true
}

impl Envelope {
    /// Parse a 2xx response body. An empty body is an envelope with no data.
    pub fn parse(body: &str) -> ApiResult<Self> {
        if body.trim().is_empty() {
            return Ok(Envelope {
                success: true,
                message: None,
                data: None,
            });
        }
        serde_json::from_str(body).map_err(|e| ApiError::Decode {
            detail: e.to_string(),
        })
    }

    /// Unwrap `data` exactly one level into `T`.
    ///
    /// Missing or `null` data decodes as JSON `null`, which suits `()` and
    /// `Option<_>` results.
    pub fn into_data<T: DeserializeOwned>(self, status: u16) -> ApiResult<T> {
        if !self.success {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("La solicitud falló: {}", status));
            return Err(ApiError::Server { status, message });
        }
        serde_json::from_value(self.data.unwrap_or(Value::Null)).map_err(|e| ApiError::Decode {
            detail: e.to_string(),
        })
    }
}
