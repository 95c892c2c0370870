//! mg-api configuration
//!
//! Loads `ApiConfig` from an optional TOML file overlaid with `MG_API_*`
//! environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigManager, ENV_PREFIX};
pub use types::{ApiConfig, ConfigStore};
