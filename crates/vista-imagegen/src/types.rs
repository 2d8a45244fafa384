use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ImageGenError, Result};

/// Error text returned when the prompt is missing or empty
pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Error text attached to every fallback result
pub const FALLBACK_ERROR: &str = "Failed to generate image, using fallback";

/// Style sent to the provider on every request
pub const STYLE: &str = "realistic";

/// Aspect ratio sent to the provider on every request
///
/// The caller's `size` is not translated into this field.
pub const ASPECT_RATIO: &str = "16:9";

/// Largest seed forwarded to the provider
pub const MAX_SEED: u16 = 999;

/// Image generation request sent by the splash page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationRequest {
    /// Text description of the desired image
    #[serde(default, deserialize_with = "loose_prompt")]
    pub prompt: Option<String>,
    /// Target resolution hint (e.g. "1920x1080")
    #[serde(default = "default_size", deserialize_with = "loose_size")]
    pub size: String,
}

impl GenerationRequest {
    /// Create a request for the given prompt with the default size
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            size: default_size(),
        }
    }

    /// The prompt, or a client error when it is missing or empty
    pub fn prompt(&self) -> Result<&str> {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.is_empty() => Ok(prompt),
            _ => Err(ImageGenError::InvalidRequest(PROMPT_REQUIRED.to_string())),
        }
    }
}

/// Default image size
fn default_size() -> String {
    "1920x1080".to_string()
}

/// Accept any JSON value as the prompt
///
/// `null`, `false`, `0` and `""` count as missing; other scalars are sent
/// in their text form and arrays or objects as JSON text.
fn loose_prompt<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let prompt = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    };

    Ok(prompt)
}

/// Accept any JSON value as the size; anything but a string means the default
fn loose_size<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(size) => size,
        _ => default_size(),
    })
}

/// Normalized result handed back to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    /// Data URI of the generated image, or a placeholder URL
    pub image_url: String,
    /// Whether `image_url` holds a generated image
    pub success: bool,
    /// Present only on fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Payload forwarded to the image generation provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub prompt: String,
    pub style: &'static str,
    pub aspect_ratio: &'static str,
    pub seed: u16,
}

impl ProviderRequest {
    /// Build the provider payload for a prompt
    ///
    /// Seeds above `MAX_SEED` are clamped.
    pub fn new(prompt: &str, seed: u16) -> Self {
        Self {
            prompt: prompt.to_string(),
            style: STYLE,
            aspect_ratio: ASPECT_RATIO,
            seed: seed.min(MAX_SEED),
        }
    }
}
