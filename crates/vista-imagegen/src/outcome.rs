use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    error::ImageGenError,
    types::{FALLBACK_ERROR, GenerationResult},
};

/// Prefix of every generated image URL
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Placeholder image served when generation fails
pub const FALLBACK_IMAGE_URL: &str = "https://picsum.photos/1920/1080";

/// Result of one proxied generation
#[derive(Debug)]
pub enum Outcome {
    /// Provider returned image bytes
    Generated { data_uri: String },
    /// Provider call failed; `cause` is for logs only
    Fallback { url: String, cause: ImageGenError },
}

impl Outcome {
    /// Wrap provider bytes as a JPEG data URI
    pub fn generated(bytes: &[u8]) -> Self {
        Self::Generated {
            data_uri: format!("{JPEG_DATA_URI_PREFIX}{}", STANDARD.encode(bytes)),
        }
    }

    /// Placeholder outcome for a failed generation
    pub fn fallback(cache_buster: u64, cause: ImageGenError) -> Self {
        Self::Fallback {
            url: format!("{FALLBACK_IMAGE_URL}?random={cache_buster}"),
            cause,
        }
    }

    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }

    /// Metric and log label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Generated { .. } => "generated",
            Self::Fallback { .. } => "fallback",
        }
    }
}

impl From<Outcome> for GenerationResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Generated { data_uri } => Self {
                image_url: data_uri,
                success: true,
                error: None,
            },
            Outcome::Fallback { url, .. } => Self {
                image_url: url,
                success: false,
                error: Some(FALLBACK_ERROR.to_string()),
            },
        }
    }
}
