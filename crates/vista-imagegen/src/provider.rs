pub(crate) mod vyro;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{error::Result, types::ProviderRequest};

/// Trait for text-to-image provider implementations
#[async_trait]
pub trait ImageGenProvider: Send + Sync {
    /// Generate one image and return its raw bytes
    async fn generate(&self, request: &ProviderRequest) -> Result<Bytes>;

    /// Get the provider name
    fn name(&self) -> &str;
}
