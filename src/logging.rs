//! Logging initialisation.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if the
/// filter does not parse or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&filter)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid logging filter: {}", directives))
}
