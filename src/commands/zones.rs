use anyhow::Result;

use formflow_core::config::AppConfig;
use formflow_loader::{HttpTransport, ResponseStatus, ZoneTransport};

/// Fetch zones for `parent` from the configured endpoint and print them,
/// exercising the same transport the loader uses.
pub async fn run(config: AppConfig, parent: String) -> Result<()> {
    let transport = HttpTransport::new(&config.endpoint)?;
    let response = transport.fetch_zones(&parent).await?;

    if response.status == ResponseStatus::Error || response.data.is_empty() {
        println!("no zones available for {}", parent);
        return Ok(());
    }

    for option in &response.data {
        println!("{}\t{}", option.value, option.label);
    }

    Ok(())
}
