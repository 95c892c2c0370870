//! Client error types

use mg_api_config::ConfigError;
use mg_api_http::HttpError;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by [`ApiClient`](crate::ApiClient)
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the exchange
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Request parameters could not be encoded as JSON
    #[error("Failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client could not be built from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
