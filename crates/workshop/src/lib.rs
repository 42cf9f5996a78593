//! Workshop Catalog Library
//!
//! This library queries the Steam Workshop publishing API for every mod
//! released for a game, normalizes each result into a compact record, and
//! writes the collection out as a single JSON catalog file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use workshop::{FetchConfig, WorkshopClient, fetch_catalog, write_catalog};
//!
//! # async fn example() -> workshop::Result<()> {
//! // Defaults target Barony's workshop
//! let config = FetchConfig::default();
//!
//! // Reads STEAM_API_KEY from the environment (or a .env file)
//! let client = WorkshopClient::from_env(&config)?;
//!
//! // Discover the item count, fetch every detail page, write the catalog
//! let records = fetch_catalog(&client, &config).await?;
//! write_catalog("data/mods.json", &records).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Complete enumeration**: discovers the published item count and
//!   fetches one detail page per item
//! - **Staggered fan-out**: concurrent page fetches with a per-page start
//!   offset to stay under the API rate limit
//! - **Fail-fast runs**: any request, decode, or write failure aborts the
//!   whole run with a nonzero exit
//! - **Async/await**: full async support with the Tokio runtime

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod writer;

// Re-export commonly used types for convenience
pub use api::WorkshopClient;
pub use catalog::fetch_catalog;
pub use config::FetchConfig;
pub use error::{Result, WorkshopError};
pub use model::{ModRecord, VoteCount};
pub use writer::write_catalog;
