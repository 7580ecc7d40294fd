mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use formflow_core::config::AppConfig;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config).unwrap_or_else(|_| {
        warn!(path = %cli.config, "config file not found, using defaults");
        include_str!("../config/default.toml").to_string()
    });
    let mut config: AppConfig = toml::from_str(&config_str)?;

    // Environment overrides for running without a config file
    if let Ok(v) = std::env::var("FORMFLOW_ENDPOINT") {
        config.endpoint.url = v;
    }
    if let Ok(v) = std::env::var("FORMFLOW_REQUEST_TIMEOUT") {
        if let Ok(n) = v.parse::<u64>() {
            config.endpoint.request_timeout_seconds = n;
        }
    }

    match cli.command {
        Commands::Zones { parent, endpoint } => {
            if let Some(endpoint) = endpoint {
                config.endpoint.url = endpoint;
            }
            commands::zones::run(config, parent).await?;
        }
        Commands::Check => {
            commands::check::run(config)?;
        }
    }

    Ok(())
}
