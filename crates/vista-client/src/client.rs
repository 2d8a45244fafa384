use futures::future::join_all;
use indexmap::IndexMap;
use rand::Rng;
use url::Url;

use crate::error::{Result, VistaClientError};
use crate::types::{GenerationRequest, GenerationResult, ImageSlot};

/// Default route of the image generation proxy
const DEFAULT_PATH: &str = "/api/generate-image";

/// Placeholder used when the proxy itself cannot be reached
const PLACEHOLDER_URL: &str = "https://picsum.photos/1920/1080";

/// Typed client for the Vista image generation proxy
#[derive(Debug, Clone)]
pub struct VistaClient {
    base_url: Url,
    path: String,
    http: reqwest::Client,
}

impl VistaClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| VistaClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            path: DEFAULT_PATH.to_owned(),
            http: reqwest::Client::new(),
        })
    }

    /// Use a non-default proxy route
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Get the base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request one image from the proxy
    ///
    /// A fallback from the proxy is still `Ok`; check `success` to tell
    /// the two apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy is unreachable or rejects the request
    pub async fn generate_image(&self, req: &GenerationRequest) -> Result<GenerationResult> {
        let url = make_url(&self.base_url, &self.path);

        let response = self.http.post(url.as_str()).json(req).send().await?;

        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Resolve every slot to a displayable URL
    ///
    /// Issues one proxy call per slot concurrently. The returned map keeps
    /// the order of `slots`; a slot whose call fails gets a placeholder.
    pub async fn resolve_slots(&self, slots: &[ImageSlot]) -> IndexMap<String, String> {
        let calls = slots.iter().map(|slot| async move {
            let request = GenerationRequest::new(slot.prompt.clone());
            let url = match self.generate_image(&request).await {
                Ok(result) => result.image_url,
                Err(_) => placeholder_url(),
            };
            (slot.key.clone(), url)
        });

        join_all(calls).await.into_iter().collect()
    }
}

/// Build a full URL from base and path
fn make_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    url.set_path(path);
    url
}

fn placeholder_url() -> String {
    format!("{PLACEHOLDER_URL}?random={}", rand::rng().random::<u64>())
}

/// Check an HTTP response for errors
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(VistaClientError::Api {
        status: status.as_u16(),
        message: parse_error_body(&body),
    })
}

/// Extract the proxy's `error` field, or the raw body
fn parse_error_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"].as_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| body.to_owned())
}
