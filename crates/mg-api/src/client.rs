//! API client

use std::fmt;
use std::sync::Arc;

use mg_api_config::{ApiConfig, ConfigStore};
use mg_api_http::{
    shared_transport, Headers, HttpResponse, HttpTransport, Method, RequestOptions,
};

use crate::{
    auth::AuthHash,
    error::Result,
    log::{DebugLog, TracingLog},
    params::RequestParams,
};

const AUTHORIZATION: &str = "authorization";
const CONTENT_TYPE: &str = "content-type";
const APPLICATION_JSON: &str = "application/json";

/// Authenticated GET/POST against a single base URL.
///
/// Holds only immutable configuration and shared handles, so clones are cheap
/// and can be used from any number of tasks.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth_hash: AuthHash,
    transport: Arc<dyn HttpTransport>,
    log: Arc<dyn DebugLog>,
}

impl ApiClient {
    /// Create a client; trailing slashes are removed from `base_url`
    pub fn new(
        base_url: impl Into<String>,
        auth_hash: impl Into<AuthHash>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_hash: auth_hash.into(),
            transport,
            log: Arc::new(TracingLog),
        }
    }

    pub fn unauthenticated(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::new(base_url, AuthHash::none(), transport)
    }

    /// Build a client with a `reqwest` transport from loaded configuration.
    ///
    /// An explicit `auth_hash` wins over `username`/`password`.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let auth_hash = if !config.auth_hash.is_empty() {
            AuthHash::new(config.auth_hash.clone())
        } else if let Some((username, password)) = config.credentials() {
            AuthHash::from_credentials(username, password)
        } else {
            AuthHash::none()
        };
        let transport = shared_transport(config.http.clone())?;
        Ok(Self::new(config.base_url.clone(), auth_hash, transport))
    }

    /// Load and validate configuration from `store`, then build a client from it
    pub fn from_store(store: &mut impl ConfigStore) -> Result<Self> {
        let config = store.load_config()?;
        store.validate_config(&config)?;
        Self::from_config(&config)
    }

    /// Replace the sink that receives failure diagnostics
    pub fn with_logger(mut self, log: Arc<dyn DebugLog>) -> Self {
        self.log = log;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        !self.auth_hash.is_empty()
    }

    /// Join `path` onto the base URL, adding a leading `/` when missing.
    ///
    /// `None` yields the base URL itself.
    pub fn endpoint(&self, path: Option<&str>) -> String {
        match path {
            None => self.base_url.clone(),
            Some(path) if path.starts_with('/') => format!("{}{}", self.base_url, path),
            Some(path) => format!("{}/{}", self.base_url, path),
        }
    }

    /// GET `url` with `params` as its query string.
    ///
    /// The transport's result is returned as-is, errors included.
    pub async fn get(
        &self,
        url: &str,
        params: &RequestParams,
    ) -> mg_api_http::Result<HttpResponse> {
        let url = params.append_to(url);

        let mut options = RequestOptions::new().with_method(Method::GET);
        if let Some(value) = self.auth_hash.header_value() {
            options = options.with_header(AUTHORIZATION, value);
        }

        self.transport.get(&url, &options).await
    }

    /// POST `params` as a JSON body, logging failures.
    ///
    /// Returns `None` when the exchange could not complete; the error and the
    /// params are sent to the debug log. Responses above 299 are logged the
    /// same way but still returned.
    pub async fn post(
        &self,
        url: &str,
        params: &RequestParams,
        options: RequestOptions,
    ) -> Option<HttpResponse> {
        match self.try_post(url, params, options).await {
            Err(err) => {
                self.log.debug(&err.to_string());
                self.log.debug(&format!("{params:#?}"));
                None
            }
            Ok(response) => {
                if response.status_code() > 299 {
                    self.log.debug(&format!("{response:#?}"));
                    self.log.debug(&format!("{params:#?}"));
                }
                Some(response)
            }
        }
    }

    /// POST without logging; transport errors are passed through
    pub async fn try_post(
        &self,
        url: &str,
        params: &RequestParams,
        options: RequestOptions,
    ) -> Result<HttpResponse> {
        let options = self.post_options(params, options)?;
        Ok(self.transport.post(url, &options).await?)
    }

    // Caller headers replace the JSON default outright; authorization is
    // always forced when a hash is set.
    fn post_options(
        &self,
        params: &RequestParams,
        mut options: RequestOptions,
    ) -> Result<RequestOptions> {
        options.method = Method::POST;

        let headers = options
            .headers
            .get_or_insert_with(|| Headers::from([(CONTENT_TYPE, APPLICATION_JSON)]));

        if let Some(value) = self.auth_hash.header_value() {
            headers.insert(AUTHORIZATION, value);
        }

        if !params.is_empty() {
            options.body = Some(params.to_json()?);
        }

        Ok(options)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("auth_hash", &self.auth_hash)
            .finish_non_exhaustive()
    }
}
