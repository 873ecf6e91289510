//! Client configuration module
//!
//! Loads the remote service base URL, the debug flag, and the location of
//! the persisted session from defaults overlaid with environment variables.

use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Prefix shared by all configuration environment variables
pub const ENV_PREFIX: &str = "APP";

/// Base URL used when `APP_API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Session directory used when `APP_STORAGE_DIR` is not set
pub const DEFAULT_STORAGE_DIR: &str = ".account";

/// Client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the remote account service, without trailing slash
    pub api_base_url: String,
    /// Enable verbose diagnostics
    pub debug: bool,
    /// Directory holding the persisted session slots
    pub storage_dir: PathBuf,
}

impl ClientConfig {
    /// Create a configuration for `api_base_url` with every other value defaulted
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            debug: false,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }

    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `APP_API_BASE_URL`: Remote service base URL (default: "http://localhost:3000")
    /// - `APP_DEBUG`: Enable debug logging (default: false)
    /// - `APP_STORAGE_DIR`: Session storage directory (default: ".account")
    pub fn from_env() -> ConfigResult<Self> {
        let settings = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("debug", false)?
            .set_default("storage_dir", DEFAULT_STORAGE_DIR)?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let mut config: ClientConfig = settings.try_deserialize()?;
        config.api_base_url = normalize_base_url(&config.api_base_url);

        if config.api_base_url.is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(config)
    }

    /// Join the base URL and an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
