//! In-process REST backend for tests.
//!
//! Every request is recorded; replies come from a FIFO script. When the
//! script is empty the backend answers with an empty success envelope.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

const MAX_BODY: usize = 16 * 1024 * 1024;

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// Scripted reply.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    delay: Duration,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::data(Value::Null)
    }
}

impl MockResponse {
    /// 200 with a raw JSON body, envelope not added.
    pub fn json(body: &str) -> Self {
        Self::new(StatusCode::OK, "application/json", body)
    }

    /// 200 with `data` inside a success envelope.
    pub fn data(data: Value) -> Self {
        Self::json(&json!({ "success": true, "message": "ok", "data": data }).to_string())
    }

    /// Error status with a `success: false` envelope.
    pub fn failure(status: u16, message: &str) -> Self {
        Self::new(
            status_code(status),
            "application/json",
            &json!({ "success": false, "message": message }).to_string(),
        )
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self::new(status_code(status), "text/plain", body)
    }

    /// Hold the reply back, to observe in-flight state.
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    fn new(status: StatusCode, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).expect("valid status code")
}

#[derive(Default)]
struct Script {
    seen: Vec<CapturedRequest>,
    replies: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Script>>;

pub struct MockBackend {
    addr: SocketAddr,
    script: Shared,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Bind an ephemeral port and start serving.
    pub async fn start() -> Self {
        let script = Shared::default();
        let app = Router::new()
            .fallback(record_and_reply)
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            script,
            server,
        }
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.script.lock().await.replies.push_back(response);
    }

    /// Requests received so far, oldest first.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.lock().await.seen.clone()
    }

    /// API root, `/api` prefix included.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn record_and_reply(State(script): State<Shared>, req: Request<Body>) -> MockResponse {
    let (parts, body) = req.into_parts();
    let captured = CapturedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect(),
        body: to_bytes(body, MAX_BODY).await.unwrap_or_default(),
    };

    let reply = {
        let mut script = script.lock().await;
        script.seen.push(captured);
        script.replies.pop_front().unwrap_or_default()
    };

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    reply
}
