//! Writing configuration back to disk.

use super::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Save the entire config to a TOML file
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    super::validate_config(config)?;

    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
