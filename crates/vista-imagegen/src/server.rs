use std::time::Instant;

use secrecy::ExposeSecret;
use vista_config::{Config, ImageGenProviderType};

use crate::{
    entropy::{Entropy, ThreadEntropy},
    error::ImageGenError,
    metrics::GenerationMetrics,
    outcome::Outcome,
    provider::{ImageGenProvider, vyro::VyroProvider},
    types::ProviderRequest,
};

/// Image generation proxy
///
/// Holds only immutable state, so one instance serves every request
/// concurrently.
pub struct Proxy {
    provider: Box<dyn ImageGenProvider>,
    entropy: Box<dyn Entropy>,
    metrics: GenerationMetrics,
}

impl Proxy {
    /// Create a proxy over the given provider and randomness source
    pub fn new(provider: Box<dyn ImageGenProvider>, entropy: Box<dyn Entropy>) -> Self {
        Self {
            provider,
            entropy,
            metrics: GenerationMetrics::new(),
        }
    }

    /// Generate an image for a validated prompt
    ///
    /// Makes exactly one provider call. Provider and transport failures
    /// come back as `Outcome::Fallback`, never as errors.
    pub async fn generate(&self, prompt: &str, size: &str) -> Outcome {
        let request = ProviderRequest::new(prompt, self.entropy.seed());

        // `size` is accepted for compatibility but the provider always gets 16:9
        tracing::debug!(
            provider = %self.provider.name(),
            size,
            seed = request.seed,
            "image generation requested"
        );

        let start = Instant::now();

        let outcome = match self.provider.generate(&request).await {
            Ok(bytes) => Outcome::generated(&bytes),
            Err(cause) => self.fallback(cause),
        };

        self.metrics.record(self.provider.name(), &outcome, start);

        outcome
    }

    /// Log `cause` and produce a placeholder outcome
    pub fn fallback(&self, cause: ImageGenError) -> Outcome {
        tracing::error!(
            provider = %self.provider.name(),
            error = %cause,
            "image generation failed, using fallback"
        );

        Outcome::fallback(self.entropy.cache_buster(), cause)
    }
}

/// Builder for constructing the proxy from configuration
pub struct ImageGenServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> ImageGenServerBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Proxy> {
        let provider_config = &self.config.imagegen.provider;

        if provider_config.api_key.expose_secret().is_empty() {
            return Err(ImageGenError::ConfigError(
                "API key required for image generation provider".to_string(),
            ));
        }

        let provider: Box<dyn ImageGenProvider> = match provider_config.provider_type {
            ImageGenProviderType::Vyro => Box::new(VyroProvider::new(
                "vyro".to_string(),
                provider_config.api_key.clone(),
                provider_config.base_url.as_ref().map(ToString::to_string),
            )),
        };

        tracing::debug!(provider = %provider.name(), "image generation proxy initialized");

        Ok(Proxy::new(provider, Box::new(ThreadEntropy)))
    }
}
