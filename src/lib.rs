pub mod cli;
pub mod core;
pub mod providers;

use anyhow::{Result, ensure};
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::shell::{self, StdinLineReader};
use crate::core::ConversionService;
use crate::core::config::AppConfig;
use crate::providers::ExchangeRateApiProvider;

pub enum AppCommand {
    Interactive,
    Convert {
        from: String,
        to: String,
        amount: String,
    },
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!(base_url = %config.providers.exchangerate_api.base_url, "Loaded config");
    Ok(config)
}

pub fn build_service(config: &AppConfig) -> Result<ConversionService> {
    let api = &config.providers.exchangerate_api;
    ensure!(
        !api.api_key.trim().is_empty(),
        "The ExchangeRate-API key in the configuration is empty"
    );

    let provider = ExchangeRateApiProvider::new(&api.base_url, api.api_key.trim())?;
    Ok(ConversionService::new(Arc::new(provider)))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = load_config(config_path)?;
    let service = build_service(&config)?;
    let mut out = std::io::stdout();

    match command {
        AppCommand::Interactive => {
            let mut input = StdinLineReader::new();
            shell::run_interactive(&service, &mut input, &mut out).await
        }
        AppCommand::Convert { from, to, amount } => {
            shell::run_single(&service, &from, &to, &amount, &mut out).await
        }
    }
}
