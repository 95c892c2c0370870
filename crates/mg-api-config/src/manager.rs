//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{ApiConfig, ConfigStore},
};

/// Default environment prefix, e.g. `MG_API_BASE_URL`
pub const ENV_PREFIX: &str = "MG_API";

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mg-api")
            .join("config.toml")
    }
}

impl ConfigStore for ConfigManager {
    fn load_config(&mut self) -> Result<ApiConfig> {
        debug!("Loading config from {}", self.config_path.display());
        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build()?;
        let api_config: ApiConfig = config.try_deserialize()?;
        Ok(api_config)
    }

    fn save_config(&self, config: &ApiConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &ApiConfig) -> Result<()> {
        if config.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Base URL must not be empty".to_string(),
            ));
        }
        if config.username.is_some() != config.password.is_some() {
            return Err(ConfigError::Validation(
                "Username and password must be set together".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
