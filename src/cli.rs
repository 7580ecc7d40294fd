use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "formflow", about = "Registration form client core — endpoint tooling")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch zone options for a parent value from the configured endpoint
    Zones {
        /// Parent select value, e.g. a country code
        #[arg(short, long)]
        parent: String,

        /// Override the endpoint URL from the config file
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Print the effective configuration
    Check,
}
