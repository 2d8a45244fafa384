use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Errors raised while proxying an image generation request
///
/// Only `InvalidRequest` is ever rendered to a caller. Every other variant
/// is absorbed into the fallback placeholder by the proxy.
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Caller misuse, such as a missing prompt
    #[error("{0}")]
    InvalidRequest(String),

    /// Provider answered with a non-success status
    #[error("Image generation failed: {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network failure talking to the provider
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider or caller sent a body that could not be interpreted
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ImageGenError {
    /// Get the appropriate HTTP status code for this error
    ///
    /// The handler only returns `InvalidRequest`; the other arms keep
    /// `IntoResponse` total.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ProviderApiError { .. } | Self::ConnectionError(_) | Self::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(message) => message.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

/// Error body returned to the splash page
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ImageGenError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_carries_message() {
        let err = ImageGenError::ProviderApiError {
            status: 500,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Image generation failed: quota exceeded");
    }

    #[test]
    fn only_invalid_request_exposes_its_message() {
        let invalid = ImageGenError::InvalidRequest("Prompt is required".to_string());
        assert_eq!(invalid.client_message(), "Prompt is required");
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let upstream = ImageGenError::ConnectionError("connection refused".to_string());
        assert_eq!(upstream.client_message(), "Internal server error");
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);
    }
}
