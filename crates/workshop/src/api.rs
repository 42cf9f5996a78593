//! Steam Workshop publishing API client
//!
//! This module handles all traffic against the published-file query
//! endpoint, including:
//! - API key management from environment variables
//! - Item count discovery for the configured application
//! - Per-page detail queries with vote data and BBCode stripping

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::FetchConfig;
use crate::error::{Result, WorkshopError};
use crate::model::{DetailPage, QueryResponse, QueryTotal, WorkshopItem};

/// Query endpoint of the published-file service
const QUERY_FILES_PATH: &str = "/IPublishedFileService/QueryFiles/v1";

/// Environment variable holding the Steam Web API key
const API_KEY_VAR: &str = "STEAM_API_KEY";

/// Authenticated client for the workshop query endpoint
#[derive(Clone)]
pub struct WorkshopClient {
    api_key: String,
    app_id: u32,
    client: Client,
    endpoint: Url,
}

impl WorkshopClient {
    /// Create a client with the API key taken from the environment
    pub fn from_env(config: &FetchConfig) -> Result<Self> {
        dotenv::dotenv().ok(); // Ignore error if .env not present
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| WorkshopError::Configuration {
            message: format!("{} environment variable not set", API_KEY_VAR),
            field: Some(API_KEY_VAR.to_string()),
            suggestion: Some(format!(
                "Set {} in your .env file with your Steam Web API key",
                API_KEY_VAR
            )),
        })?;

        Self::new(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn new(api_key: String, config: &FetchConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.api_base)
            .and_then(|base| base.join(QUERY_FILES_PATH))
            .map_err(|source| WorkshopError::InvalidUrl {
                url: config.api_base.clone(),
                suggestion: "API base must be an absolute http(s) URL".to_string(),
                source,
            })?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| WorkshopError::HttpRequest {
                url: endpoint.to_string(),
                source,
            })?;

        Ok(Self {
            api_key,
            app_id: config.app_id,
            client,
            endpoint,
        })
    }

    /// Number of items currently published for the configured application
    pub async fn total_published(&self) -> Result<u64> {
        let query = [
            ("appid", self.app_id.to_string()),
            ("key", self.api_key.clone()),
        ];

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let url = response.url().clone();
        let body = response.text().await?;
        debug!("Workshop query response: {}", body);

        let payload: QueryResponse<QueryTotal> =
            serde_json::from_str(&body).map_err(|source| WorkshopError::Decode {
                url: url.to_string(),
                source,
            })?;

        Ok(payload.response.total)
    }

    /// Fetch the single item carried by the given detail page
    ///
    /// Pages hold one item each, so a response with any other entry count
    /// fails the run.
    pub async fn item_details(&self, page: u64) -> Result<WorkshopItem> {
        let query = [
            ("appid", self.app_id.to_string()),
            ("key", self.api_key.clone()),
            ("page", page.to_string()),
            ("return_details", "true".to_string()),
            ("return_vote_data", "true".to_string()),
            ("strip_description_bbcode", "true".to_string()),
        ];

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let url = response.url().clone();
        let body = response.text().await?;
        debug!("Workshop detail response for page {}: {}", page, body);

        let payload: QueryResponse<DetailPage> =
            serde_json::from_str(&body).map_err(|source| WorkshopError::Decode {
                url: url.to_string(),
                source,
            })?;

        let mut items = payload.response.items;
        if items.len() != 1 {
            return Err(WorkshopError::UnexpectedEntryCount {
                page,
                count: items.len(),
            });
        }

        Ok(items.remove(0))
    }
}
