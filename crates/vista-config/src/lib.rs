#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod imagegen;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use imagegen::*;
pub use server::*;
pub use telemetry::TelemetryConfig;

/// Top-level Vista configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener, health and CORS settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Image generation proxy settings
    pub imagegen: ImageGenConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
