//! Configuration module for environment variable parsing.

use std::env;
use tracing::warn;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Opaque API key; its `-<datacenter>` suffix selects the endpoint host
    pub api_key: String,

    /// Optional endpoint override (testing, proxies); skips datacenter
    /// resolution when set
    pub base_url: Option<String>,

    /// HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = env::var("MAILCHIMP_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("MAILCHIMP_API_KEY is not set");
        }

        Config {
            api_key,

            base_url: env::var("MAILCHIMP_BASE_URL").ok().filter(|v| !v.is_empty()),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
