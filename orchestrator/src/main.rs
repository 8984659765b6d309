//! Chimp Orchestrator - entry point.
//!
//! Reads the API key from the environment, builds the orchestrator, and
//! verifies connectivity with a resilient list fetch.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chimp::{ApiClient, Config, Orchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    tracing::info!("orchestrator_starting");

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(
        api_key_set = !config.api_key.is_empty(),
        base_url_override = config.base_url.is_some(),
        request_timeout_ms = config.request_timeout_ms,
        "config_loaded"
    );

    let client = ApiClient::new(&config).context("Failed to construct API client")?;
    let orchestrator = Orchestrator::new(client);

    let lists = orchestrator.get_lists().await;
    tracing::info!(
        lists = lists.items.len(),
        degraded = lists.exhausted,
        "orchestrator_ready"
    );

    Ok(())
}
