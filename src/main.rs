use anyhow::Result;
use clap::{Parser, Subcommand};
use conversor::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup {
        /// ExchangeRate-API key to write into the configuration
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Convert a single amount and exit
    Convert {
        /// Source currency code, e.g. USD
        from: String,
        /// Target currency code, e.g. EUR
        to: String,
        /// Amount in the source currency
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup { api_key }) => match cli.config_path.as_deref() {
            Some(path) => conversor::cli::setup::setup_at_path(path, api_key.as_deref()),
            None => conversor::cli::setup::setup(api_key.as_deref()),
        },
        Some(Commands::Convert { from, to, amount }) => {
            conversor::run_command(
                conversor::AppCommand::Convert { from, to, amount },
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            conversor::run_command(
                conversor::AppCommand::Interactive,
                cli.config_path.as_deref(),
            )
            .await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
