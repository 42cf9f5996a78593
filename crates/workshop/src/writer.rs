//! Catalog persistence

use std::path::Path;
use tracing::info;

use crate::error::{Result, WorkshopError};
use crate::model::ModRecord;

/// Serialize the catalog and write it to `path`, replacing any previous
/// contents
///
/// The parent directory must already exist.
pub async fn write_catalog(path: impl AsRef<Path>, records: &[ModRecord]) -> Result<()> {
    let path = path.as_ref();
    let body = serde_json::to_string(records).map_err(|source| WorkshopError::Encode { source })?;

    tokio::fs::write(path, body)
        .await
        .map_err(|source| WorkshopError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Wrote {} mod records to {}", records.len(), path.display());
    Ok(())
}
