//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use vista_config::{
    Config, CorsConfig, HealthConfig, ImageGenConfig, ImageGenProviderConfig, ImageGenProviderType, ServerConfig,
};

/// API key the mock provider expects
pub const TEST_API_KEY: &str = "test-key";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder whose provider points at `provider_base_url`
    pub fn new(provider_base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                imagegen: ImageGenConfig {
                    path: "/api/generate-image".to_owned(),
                    provider: ImageGenProviderConfig {
                        provider_type: ImageGenProviderType::Vyro,
                        api_key: SecretString::from(TEST_API_KEY),
                        base_url: Some(provider_base_url.parse().expect("valid URL")),
                    },
                },
                telemetry: None,
            },
        }
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
