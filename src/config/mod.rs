pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./mediaforged.toml",
        "~/.config/mediaforged/config.toml",
        "/etc/mediaforged/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("Invalid logging filter: {}", config.logging.filter))?;

    if config.properties.unavailable_value.is_empty() {
        anyhow::bail!("properties.unavailable_value cannot be empty");
    }

    let frame = &config.audio.default_frame;
    if frame.sample_rate == 0 {
        anyhow::bail!("audio.default_frame.sample_rate cannot be 0");
    }
    if frame.channels == 0 {
        anyhow::bail!("audio.default_frame.channels cannot be 0");
    }

    if !config.properties.include_metadata {
        tracing::debug!("container metadata will be left out of property exports");
    }

    Ok(())
}
