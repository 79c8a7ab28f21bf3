//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section has defaults,
//! so a missing file is equivalent to an empty one. `PROPTRADE_API_URL` and
//! `PROPTRADE_USER_ID` override the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

mod api;
mod logging;

pub use api::ApiConfig;
pub use logging::LoggingConfig;

pub const API_URL_ENV: &str = "PROPTRADE_API_URL";
pub const USER_ID_ENV: &str = "PROPTRADE_USER_ID";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate the configuration file at `path`.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let mut config = Self::default();
            config.apply_env();
            config.validate()?;
            return Ok(config);
        }
        Self::load(path)
    }

    #[allow(clippy::result_large_err)]
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(USER_ID_ENV).ok(),
        );
    }

    /// Apply explicit overrides; blank values are ignored.
    pub fn apply_overrides(&mut self, api_url: Option<String>, user_id: Option<String>) {
        if let Some(url) = api_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(user) = user_id.filter(|v| !v.trim().is_empty()) {
            self.api.user_id = user;
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api.base_url" }.into());
        }
        if let Err(err) = url::Url::parse(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: err.to_string(),
            }
            .into());
        }
        if self.api.user_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api.user_id" }.into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// Returns the proptrade home directory (`~/.proptrade/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".proptrade")
}

/// Returns the default config file path (`~/.proptrade/config.toml`).
pub fn default_config_path() -> PathBuf {
    home_dir().join("config.toml")
}
