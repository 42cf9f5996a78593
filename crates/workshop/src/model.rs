//! Wire and output data models for workshop items

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope wrapping every Steam Web API payload
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse<T> {
    pub response: T,
}

/// Discovery payload carrying the published item count
#[derive(Debug, Clone, Deserialize)]
pub struct QueryTotal {
    pub total: u64,
}

/// Detail payload carrying the requested page of items
#[derive(Debug, Clone, Deserialize)]
pub struct DetailPage {
    #[serde(rename = "publishedfiledetails")]
    pub items: Vec<WorkshopItem>,
}

/// One published workshop item as the API reports it
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopItem {
    #[serde(rename = "publishedfileid")]
    pub id: String,
    pub title: String,
    /// The live API serializes this as a string-encoded integer
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub file_size: u64,
    pub preview_url: String,
    #[serde(rename = "file_description")]
    pub description: String,
    pub time_created: u64,
    pub time_updated: u64,
    pub views: u64,
    pub favorited: u64,
    pub tags: Vec<ItemTag>,
    pub vote_data: VoteData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemTag {
    pub tag: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoteData {
    pub votes_up: u64,
    pub votes_down: u64,
}

/// Normalized mod record as written to the catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    pub id: String,
    pub title: String,
    pub file_size: u64,
    pub preview_url: String,
    pub description: String,
    pub time_created: u64,
    pub time_updated: u64,
    pub views: u64,
    pub favorited: u64,
    pub tags: Vec<String>,
    pub votes: VoteCount,
}

/// Up/down vote tally for one mod
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    pub up: u64,
    pub down: u64,
}

impl From<WorkshopItem> for ModRecord {
    fn from(item: WorkshopItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            file_size: item.file_size,
            preview_url: item.preview_url,
            description: item.description,
            time_created: item.time_created,
            time_updated: item.time_updated,
            views: item.views,
            favorited: item.favorited,
            tags: item.tags.into_iter().map(|t| t.tag).collect(),
            votes: VoteCount {
                up: item.vote_data.votes_up,
                down: item.vote_data.votes_down,
            },
        }
    }
}

/// Accept both `"4096"` and `4096` for integer fields the API serializes
/// inconsistently
fn u64_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}
