//! Thin client for JSON APIs behind HTTP Basic authentication
//!
//! `ApiClient` owns a base URL and an optional pre-encoded Basic credential.
//! It builds endpoint URLs and query strings, injects the `authorization`
//! header, encodes POST bodies as JSON and hands the request to an injected
//! [`HttpTransport`].
//!
//! ```no_run
//! use mg_api::{ApiClient, RequestOptions, RequestParams};
//! use mg_api_http::{shared_transport, HttpConfig};
//!
//! # async fn run() -> mg_api::Result<()> {
//! let transport = shared_transport(HttpConfig::default())?;
//! let client = ApiClient::new("https://api.example.com/v1/", "dXNlcjpwYXNz", transport);
//!
//! let params = RequestParams::from([("status", "open")]);
//! let list = client.get(&client.endpoint(Some("orders")), &params).await?;
//!
//! let order = RequestParams::from([("sku", "A-1")]);
//! if let Some(created) = client
//!     .post(&client.endpoint(Some("orders")), &order, RequestOptions::default())
//!     .await
//! {
//!     println!("{} {}", list.status, created.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod log;
pub mod params;

pub use auth::AuthHash;
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use log::{DebugLog, MemoryLog, TracingLog};
pub use params::RequestParams;

/// Re-export transport types callers need alongside the client
pub use mg_api_http::{Headers, HttpError, HttpResponse, HttpTransport, RequestOptions, StatusCode};
