//! HTTP transport capability for mg-api
//!
//! Provides the mockable transport seam the API client delegates network I/O to.
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `HttpTransport`
//! - **Configurable**: Timeouts, proxy, user-agent, redirect limit
//! - **Status-agnostic**: 4xx/5xx come back as responses, not errors
//! - **Testing support**: Easy mocking with wiremock

pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use config::HttpConfig;
pub use error::{HttpError, Result};
pub use request::{Headers, RequestOptions};
pub use response::HttpResponse;
pub use transport::{shared_transport, HttpTransport, ReqwestTransport};

/// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
