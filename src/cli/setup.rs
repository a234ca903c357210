use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

const API_KEY_PLACEHOLDER: &str = "YOUR-API-KEY";

// Include the example config as a string literal in the binary
const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Creates a configuration file at the default location
pub fn setup(api_key: Option<&str>) -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(&path, api_key)
}

/// Creates a configuration file at the specified path, filling in the API key when given
pub fn setup_at_path<P: AsRef<Path>>(path: P, api_key: Option<&str>) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let config = match api_key {
        Some(key) => EXAMPLE_CONFIG.replace(API_KEY_PLACEHOLDER, key),
        None => EXAMPLE_CONFIG.to_string(),
    };

    std::fs::write(path, config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    println!("Configuration written to {}", path.display());
    Ok(())
}
