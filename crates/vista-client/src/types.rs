use serde::{Deserialize, Serialize};

/// Request body accepted by the proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Text description of the desired image
    pub prompt: String,
    /// Target resolution hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Result returned by the proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Data URI or placeholder URL, ready to display
    pub image_url: String,
    /// Whether a real image was generated
    pub success: bool,
    /// Diagnostic text, present only on fallback
    #[serde(default)]
    pub error: Option<String>,
}

/// One image position on the page, such as "hero" or "sunset"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub key: String,
    pub prompt: String,
}

impl ImageSlot {
    pub fn new(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
        }
    }
}
