//! Command-line entry point for the workshop catalog exporter
//!
//! Runs the whole pipeline in one shot: discover the published item count,
//! fetch every detail page, and rewrite the catalog file. There are no
//! flags; configuration is compiled in and the API key comes from the
//! environment.

use std::time::Instant;

use tracing::{error, info};
use workshop::{FetchConfig, WorkshopClient, fetch_catalog, write_catalog};

/// Catalog location expected by the site build
const CATALOG_PATH: &str = "data/mods.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    info!(
        "Starting workshop catalog update version {}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(error) = run().await {
        error!("Catalog update failed ({}): {}", error.category(), error);
        if let Some(hint) = error.suggestion() {
            info!("{}", hint);
        }
        return Err(error.into());
    }

    Ok(())
}

async fn run() -> workshop::Result<()> {
    let started = Instant::now();
    let config = FetchConfig::default();
    let client = WorkshopClient::from_env(&config)?;

    let records = fetch_catalog(&client, &config).await?;
    write_catalog(CATALOG_PATH, &records).await?;

    info!(
        "Updated {} with {} mods in {:.1}s",
        CATALOG_PATH,
        records.len(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
