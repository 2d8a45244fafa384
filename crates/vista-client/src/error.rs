/// Client-specific result type
pub type Result<T> = std::result::Result<T, VistaClientError>;

/// Errors from the Vista client
#[derive(Debug, thiserror::Error)]
pub enum VistaClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Proxy rejected the request
    #[error("{status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the proxy's `error` field
        message: String,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
