#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Image generation proxy for the splash page
//!
//! Accepts a prompt, forwards it to the text-to-image provider and always
//! answers with something the page can render: the generated picture as a
//! data URI, or a placeholder URL when generation fails.

mod entropy;
mod error;
mod metrics;
mod outcome;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    routing::post,
};

pub use entropy::{Entropy, ThreadEntropy};
pub use error::{ImageGenError, Result};
pub use outcome::{FALLBACK_IMAGE_URL, JPEG_DATA_URI_PREFIX, Outcome};
pub use provider::ImageGenProvider;
pub use server::{ImageGenServerBuilder, Proxy};
pub use types::{
    ASPECT_RATIO, FALLBACK_ERROR, GenerationRequest, GenerationResult, MAX_SEED, PROMPT_REQUIRED, ProviderRequest,
    STYLE,
};

/// Build the image generation proxy from configuration
///
/// # Errors
///
/// Returns an error if the proxy fails to initialize
pub fn build_server(config: &vista_config::Config) -> anyhow::Result<Arc<Proxy>> {
    let proxy = Arc::new(
        ImageGenServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize image generation proxy: {e}"))?,
    );
    Ok(proxy)
}

/// Largest request body read by the image route
pub const MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Create the endpoint router for image generation
pub fn endpoint_router(path: &str) -> Router<Arc<Proxy>> {
    Router::new().route(path, post(generate).layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES)))
}

/// Handle image generation requests
///
/// The body is read and parsed by hand so that an oversized or unreadable
/// payload falls back like any other failure instead of surfacing an
/// extractor rejection.
async fn generate(
    State(proxy): State<Arc<Proxy>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<GenerationResult>> {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            let cause = ImageGenError::MalformedResponse(format!("unreadable request body: {}", e.body_text()));
            return Ok(Json(proxy.fallback(cause).into()));
        }
    };

    let request: GenerationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            let cause = ImageGenError::MalformedResponse(format!("unreadable request body: {e}"));
            return Ok(Json(proxy.fallback(cause).into()));
        }
    };

    let prompt = request.prompt()?;
    let outcome = proxy.generate(prompt, &request.size).await;

    tracing::debug!(outcome = outcome.label(), "image generation complete");

    Ok(Json(outcome.into()))
}
