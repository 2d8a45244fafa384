#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the Vista image generation proxy
//!
//! Used by the rendering layer to fill named image slots on the splash
//! page. Every slot resolves to a displayable URL.

mod client;
pub mod error;
pub mod types;

pub use client::VistaClient;
pub use error::{Result, VistaClientError};
pub use types::*;
