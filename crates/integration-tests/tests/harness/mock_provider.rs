//! Mock text-to-image provider for integration tests
//!
//! Accepts the multipart form the proxy sends, records it, and answers
//! with a canned reply

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Canned reply returned for every generation request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with raw image bytes
    Image(Vec<u8>),
    /// Error status with an `application/json` body
    JsonError(u16, String),
    /// Error status with a `text/plain` body
    TextError(u16, String),
}

/// One request as seen by the provider
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub fields: HashMap<String, String>,
}

impl RecordedRequest {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}

struct MockState {
    reply: MockReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Mock provider server bound to a random port
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockProvider {
    /// Start the mock server, returning immediately
    pub async fn start(reply: MockReply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v2/image/generations", routing::post(handle_generation))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Start a mock that returns the given image bytes
    pub async fn with_image(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::start(MockReply::Image(bytes.to_vec())).await
    }

    /// Base URL for configuring the mock as the provider
    pub fn base_url(&self) -> String {
        format!("http://{}/v2", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    /// Snapshot of every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("mock state lock").clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, MultipartError> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_owned();
        let value = field.text().await?;
        fields.insert(name, value);
    }

    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    state
        .requests
        .lock()
        .expect("mock state lock")
        .push(RecordedRequest { authorization, fields });

    let response = match &state.reply {
        MockReply::Image(bytes) => (StatusCode::OK, [(CONTENT_TYPE, "image/jpeg")], bytes.clone()).into_response(),
        MockReply::JsonError(status, body) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        MockReply::TextError(status, body) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(CONTENT_TYPE, "text/plain")],
            body.clone(),
        )
            .into_response(),
    };

    Ok(response)
}
