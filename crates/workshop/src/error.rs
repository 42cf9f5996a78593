//! Error types for the catalog pipeline with context for logging

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the catalog, from configuration through to
/// writing the output file
#[derive(Error, Debug)]
pub enum WorkshopError {
    /// HTTP transport failures and non-success statuses with request context
    #[error("HTTP request to '{url}' failed")]
    HttpRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response bodies that do not decode as the expected payload
    #[error("Failed to decode response from '{url}'")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Detail pages are requested one item at a time; any other entry count
    /// breaks the page-per-item contract
    #[error("Detail page {page} returned {count} entries, expected exactly 1")]
    UnexpectedEntryCount { page: u64, count: usize },

    /// URL parsing errors with helpful suggestions
    #[error("Invalid URL '{url}': {suggestion}")]
    InvalidUrl {
        url: String,
        suggestion: String,
        #[source]
        source: url::ParseError,
    },

    /// File system I/O errors with file context
    #[error("File operation failed on '{path}'")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog serialization failures
    #[error("Failed to encode the catalog as JSON")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, WorkshopError>;

impl WorkshopError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            WorkshopError::HttpRequest { .. } => "http_request",
            WorkshopError::Decode { .. } => "decode",
            WorkshopError::UnexpectedEntryCount { .. } => "unexpected_entry_count",
            WorkshopError::InvalidUrl { .. } => "invalid_url",
            WorkshopError::FileSystem { .. } => "file_system",
            WorkshopError::Encode { .. } => "encode",
            WorkshopError::Configuration { .. } => "configuration",
        }
    }

    /// Get user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            WorkshopError::InvalidUrl { suggestion, .. } => Some(suggestion),
            WorkshopError::Configuration { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WorkshopError {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());

        WorkshopError::HttpRequest { url, source: error }
    }
}
