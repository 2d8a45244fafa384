use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response, header::CONTENT_TYPE, multipart::Form};
use secrecy::{ExposeSecret, SecretString};

use super::ImageGenProvider;
use crate::{
    error::{ImageGenError, Result},
    types::ProviderRequest,
};

/// Default Vyro API base URL
const DEFAULT_BASE_URL: &str = "https://api.vyro.ai/v2";

/// Vyro text-to-image provider
///
/// Sends a multipart form and receives the raw image bytes on success.
pub(crate) struct VyroProvider {
    name: String,
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl VyroProvider {
    /// Create a new Vyro provider
    pub fn new(name: String, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            name,
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn form(request: &ProviderRequest) -> Form {
        Form::new()
            .text("prompt", request.prompt.clone())
            .text("style", request.style)
            .text("aspect_ratio", request.aspect_ratio)
            .text("seed", request.seed.to_string())
    }
}

/// Turn a non-success response into the matching error
///
/// JSON bodies contribute their `message` field; anything else is reduced
/// to the status reason phrase.
async fn failure_from(response: Response) -> ImageGenError {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown Status").to_string();

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains("application/json"));

    if !is_json {
        return ImageGenError::ProviderApiError {
            status: status.as_u16(),
            message: reason,
        };
    }

    let body: serde_json::Value = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            return ImageGenError::MalformedResponse(format!("unreadable error body ({status}): {e}"));
        }
    };

    let message = match body.get("message") {
        Some(serde_json::Value::String(message)) if !message.is_empty() => message.clone(),
        Some(serde_json::Value::Null | serde_json::Value::String(_)) | None => reason,
        Some(other) => other.to_string(),
    };

    ImageGenError::ProviderApiError {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ImageGenProvider for VyroProvider {
    async fn generate(&self, request: &ProviderRequest) -> Result<Bytes> {
        let url = format!("{}/image/generations", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            provider = %self.name,
            seed = request.seed,
            "sending image generation request"
        );

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .multipart(Self::form(request))
            .send()
            .await
            .map_err(|e| {
                ImageGenError::ConnectionError(format!("Failed to send request to Vyro image generation: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            tracing::debug!(provider = %self.name, status = %status, "Vyro image generation API error");
            return Err(failure_from(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageGenError::ConnectionError(format!("Failed to read Vyro image body: {e}")))?;

        tracing::debug!(provider = %self.name, bytes = bytes.len(), "image generation request complete");

        Ok(bytes)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
