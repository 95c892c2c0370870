//! HTTP transport implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Method,
};
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
    request::{Headers, RequestOptions},
    response::HttpResponse,
};

/// Mockable transport capability.
///
/// Implementations report every completed exchange as `Ok`, including 4xx
/// and 5xx statuses; `Err` is reserved for exchanges that never completed.
/// `get` always sends GET and `post` always sends POST, whatever
/// `options.method` says.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a GET request
    async fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse>;

    /// Execute a POST request
    async fn post(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse>;
}

/// Production transport backed by `reqwest`
pub struct ReqwestTransport {
    inner: reqwest::Client,
    config: HttpConfig,
}

impl ReqwestTransport {
    /// Create a new transport with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Create transport with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Get underlying reqwest client (for advanced usage)
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse> {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        let mut request = self.inner.request(method, url);

        if let Some(headers) = &options.headers {
            request = request.headers(to_header_map(headers)?);
        }

        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let headers = from_header_map(response.headers());
        let body = response.text().await.map_err(|e| self.classify(e))?;

        debug!("HTTP response: {}", status);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn classify(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout(self.config.timeout)
        } else if error.is_connect() {
            HttpError::Connection(error.to_string())
        } else {
            HttpError::RequestFailed(error)
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse> {
        debug!("HTTP GET: {}", url);
        self.execute(Method::GET, url, options).await
    }

    async fn post(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse> {
        debug!("HTTP POST: {}", url);
        self.execute(Method::POST, url, options).await
    }
}

fn to_header_map(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

// Values that are not visible ASCII are dropped
fn from_header_map(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// Create a shared transport (Arc-wrapped for cloning)
pub fn shared_transport(config: HttpConfig) -> Result<Arc<dyn HttpTransport>> {
    Ok(Arc::new(ReqwestTransport::new(config)?))
}
