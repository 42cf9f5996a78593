//! Catalog assembly: discovery, staggered fan-out, and the join

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

use crate::api::WorkshopClient;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::model::ModRecord;

/// Fetch every published item and normalize it into a mod record
///
/// Each page's request is held back until its start offset has elapsed, and
/// at most `max_in_flight` requests run at once. Records are returned in
/// completion order; callers must not rely on any particular ordering. The
/// first failed page aborts the whole run.
pub async fn fetch_catalog(
    client: &WorkshopClient,
    config: &FetchConfig,
) -> Result<Vec<ModRecord>> {
    let total = client.total_published().await?;
    info!("Workshop reports {} published mods", total);

    let fan_out_start = Instant::now();
    let records: Vec<ModRecord> = stream::iter(1..=total)
        .map(|page| {
            let deadline = fan_out_start + config.stagger_for(page);
            async move {
                sleep_until(deadline).await;
                debug!("Requesting details for page {}", page);
                client.item_details(page).await.map(ModRecord::from)
            }
        })
        .buffer_unordered(config.max_in_flight)
        .try_collect()
        .await?;

    Ok(records)
}
