//! Core configuration types and data structures

use mg_api_http::HttpConfig;
use serde::{Deserialize, Serialize};

/// Settings for one target API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Root URL of the API
    #[serde(default)]
    pub base_url: String,
    /// Pre-encoded Basic credential; takes precedence over username/password
    #[serde(default)]
    pub auth_hash: String,
    /// Basic auth user, encoded together with `password`
    #[serde(default)]
    pub username: Option<String>,
    /// Basic auth password
    #[serde(default)]
    pub password: Option<String>,
    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_auth_hash(mut self, auth_hash: impl Into<String>) -> Self {
        self.auth_hash = auth_hash.into();
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Username and password, when both are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

/// Configuration store trait
pub trait ConfigStore {
    /// Load configuration
    fn load_config(&mut self) -> Result<ApiConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &ApiConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &ApiConfig) -> Result<(), crate::error::ConfigError>;
}
