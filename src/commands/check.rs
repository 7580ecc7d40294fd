use anyhow::Result;

use formflow_core::config::AppConfig;

/// Print the effective configuration after file load and env overrides.
pub fn run(config: AppConfig) -> Result<()> {
    println!("endpoint url:            {}", config.endpoint.url);
    println!(
        "connect timeout seconds: {}",
        config.endpoint.connect_timeout_seconds
    );
    println!(
        "request timeout seconds: {}",
        config.endpoint.request_timeout_seconds
    );

    Ok(())
}
