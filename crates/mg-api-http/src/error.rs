//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Failures to complete an HTTP exchange.
///
/// A response with a non-2xx status is not an error at this layer; it is
/// returned as an [`HttpResponse`](crate::HttpResponse).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Connection could not be established
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Header name or value rejected by the transport
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Transport build error
    #[error("Failed to build HTTP transport: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Whether the exchange never reached the server (DNS, refused, timeout)
    pub fn is_network(&self) -> bool {
        match self {
            HttpError::RequestFailed(e) => e.is_timeout() || e.is_connect(),
            HttpError::Timeout(_) | HttpError::Connection(_) => true,
            _ => false,
        }
    }
}
