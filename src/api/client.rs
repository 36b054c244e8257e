use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::{ApiConfig, ConfigError};
use crate::session::{build_auth_header, SessionContext};

use super::envelope::Envelope;
use super::error::{ApiError, ApiResult, Field};
use super::multipart::MultipartBody;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

/// One backend call: method, path segments relative to the base URL, body,
/// and whether a session is required.
///
/// The route passed to a constructor is split on `/`; ids added with
/// [`segment`](Self::segment) stay a single segment and are percent-encoded,
/// so `/`, `?` or `..` inside an id cannot leave the resource path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub auth: bool,
}

impl ApiRequest {
    pub fn new(method: Method, route: &str) -> Self {
        Self {
            method,
            segments: route
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
            body: RequestBody::Empty,
            auth: false,
        }
    }

    pub fn get(route: &str) -> Self {
        Self::new(Method::GET, route)
    }

    pub fn post(route: &str) -> Self {
        Self::new(Method::POST, route)
    }

    pub fn put(route: &str) -> Self {
        Self::new(Method::PUT, route)
    }

    pub fn delete(route: &str) -> Self {
        Self::new(Method::DELETE, route)
    }

    /// Append one path segment taken verbatim, typically an id.
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    /// Path for logs and error messages.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Mark the call as requiring a session.
    pub fn authenticated(mut self) -> Self {
        self.auth = true;
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode {
            detail: format!("request body: {}", e),
        })?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, body: MultipartBody) -> Self {
        self.body = RequestBody::Multipart(body);
        self
    }
}

/// The single chokepoint for backend calls.
///
/// Attaches standard headers and the bearer token, awaits the response and
/// normalizes it into an [`ApiResult`]. Holds no state of its own beyond the
/// injected session.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionContext) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(config.base_url())?;
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> ApiResult<Url> {
        if let Some(bad) = request
            .segments
            .iter()
            .find(|s| s.trim().is_empty() || matches!(s.as_str(), "." | ".."))
        {
            return Err(ApiError::validation(
                Field::General,
                format!("Identificador no válido '{}'", bad),
            ));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::validation(
                    Field::General,
                    format!("URL base no válida '{}'", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    /// Perform `request` and unwrap the envelope's `data` into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let request_id = Uuid::new_v4();

        if request.auth && !self.session.is_authenticated() {
            tracing::warn!(%request_id, path = %request.path(), "Rejected: no session");
            return Err(ApiError::Unauthenticated);
        }

        let url = self.url_for(&request)?;
        let method = request.method.clone();
        let path = request.path();

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some((name, value)) = build_auth_header(&self.session) {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(body) => builder.multipart(body.into_form()?),
        };

        tracing::debug!(%request_id, %method, %path, "Sending request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%request_id, %method, %path, "Connection failed: {}", e);
            ApiError::Connection {
                message: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Connection {
            message: e.to_string(),
        })?;

        tracing::debug!(%request_id, %method, %path, status, "Received response");

        let result = if (200..300).contains(&status) {
            Envelope::parse(&body).and_then(|envelope| envelope.into_data(status))
        } else {
            Err(ApiError::from_response(status, &body))
        };

        if let Err(ref e) = result {
            tracing::warn!(%request_id, %method, %path, status, "Request failed: {:?}", e);
        }
        result
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    // A trailing '/' leaves an empty last segment that `url_for` pops.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|e| ConfigError::ValidationError {
        message: format!("Invalid base URL '{}': {}", raw, e),
    })
}
