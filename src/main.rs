use clap::Parser;
use notesum::client::SummarizeClient;
use notesum::config::{Config, ConfigError, ConfigOverrides, Variant, API_URL_ENV_VAR};
use notesum::logging::init_tracing;
use notesum::ui::runtime;
use notesum::ui::theme::ThemeMode;
use std::path::PathBuf;
use std::sync::Arc;

/// Paste your messy notes. Get a clean, short summary in seconds.
#[derive(Parser, Debug)]
#[command(name = "notesum", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/notesum/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the summarisation backend base URL
    #[arg(long, short = 'e', value_name = "URL")]
    endpoint: Option<String>,

    /// Request/response contract spoken by the backend
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Initial color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(
        endpoint = %config.endpoint.summarize_url(),
        variant = ?config.summary.variant,
        "Starting notesum"
    );

    let client = Arc::new(SummarizeClient::new(&config.endpoint, config.summary.variant)?);
    let handle = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || runtime::run(config, client, handle)).await??;

    Ok(())
}

fn load_config(cli: Cli) -> Result<Config, ConfigError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    config.resolve(
        std::env::var(API_URL_ENV_VAR).ok(),
        ConfigOverrides {
            endpoint: cli.endpoint,
            variant: cli.variant,
            theme: cli.theme,
        },
    )
}
