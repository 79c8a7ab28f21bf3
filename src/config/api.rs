//! Trading API connection settings.

use serde::Deserialize;

/// Connection settings for the trading API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User on whose behalf watchlist and order requests are made.
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum attempts for reads that fail with a timeout or connect error.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Reuse loaded property views within a session.
    #[serde(default)]
    pub cache: bool,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

fn default_user_id() -> String {
    "1".into()
}

const fn default_timeout_ms() -> u64 {
    5000
}

const fn default_connect_timeout_ms() -> u64 {
    2000
}

const fn default_retry_max_attempts() -> u32 {
    2
}

const fn default_retry_backoff_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            cache: false,
        }
    }
}
