use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Image generation proxy configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    /// Route the proxy is mounted on
    #[serde(default = "default_path")]
    pub path: String,
    /// Upstream text-to-image provider
    pub provider: ImageGenProviderConfig,
}

/// Configuration for the upstream image generation provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: ImageGenProviderType,
    /// Bearer token sent with every upstream request
    pub api_key: SecretString,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
}

/// Supported image generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageGenProviderType {
    /// Vyro text-to-image API
    Vyro,
}

fn default_path() -> String {
    "/api/generate-image".to_string()
}
