use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_EXCHANGERATE_API_URL: &str = "https://v6.exchangerate-api.com/v6";

fn default_exchangerate_api_url() -> String {
    DEFAULT_EXCHANGERATE_API_URL.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateApiConfig {
    #[serde(default = "default_exchangerate_api_url")]
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchangerate_api: ExchangeRateApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub providers: ProvidersConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "No usable configuration at {}; run `conversor setup` to create one",
                config_path.display()
            )
        })
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "conversor", "conversor")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  exchangerate_api:
    api_key: "secret-key"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.exchangerate_api.api_key, "secret-key");
        assert_eq!(
            config.providers.exchangerate_api.base_url,
            DEFAULT_EXCHANGERATE_API_URL
        );

        let yaml_str_with_url = r#"
providers:
  exchangerate_api:
    base_url: "http://example.com/v6"
    api_key: "other-key"
        "#;
        let config_with_url: AppConfig = serde_yaml::from_str(yaml_str_with_url).unwrap();
        assert_eq!(
            config_with_url.providers.exchangerate_api.base_url,
            "http://example.com/v6"
        );
        assert_eq!(config_with_url.providers.exchangerate_api.api_key, "other-key");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let yaml_str = r#"
providers:
  exchangerate_api:
    base_url: "http://example.com/v6"
"#;
        let result: Result<AppConfig, _> = serde_yaml::from_str(yaml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            "providers:\n  exchangerate_api:\n    api_key: \"abc\"\n",
        )?;

        let config = AppConfig::load_from_path(&config_path)?;
        assert_eq!(config.providers.exchangerate_api.api_key, "abc");
        Ok(())
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/conversor/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
