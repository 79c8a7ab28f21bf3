//! Canonical test configurations.

use crate::config::ApiConfig;

/// API config pointing at `base_url` with retries and backoff disabled.
pub fn api(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_ms: 2_000,
        connect_timeout_ms: 1_000,
        retry_max_attempts: 1,
        retry_backoff_ms: 0,
        ..ApiConfig::default()
    }
}
