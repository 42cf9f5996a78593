//! Configuration types for catalog fetch runs

use std::time::Duration;

/// Barony's Steam application id
pub const BARONY_APP_ID: u32 = 371970;

/// Configuration for a catalog fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Steam application id whose workshop is enumerated
    pub app_id: u32,
    /// Base URL of the Steam Web API
    pub api_base: String,
    pub user_agent: String,
    /// Minimum start offset added per page index during the fan-out
    pub stagger: Duration,
    /// Maximum number of detail requests running at once
    pub max_in_flight: usize,
}

impl FetchConfig {
    /// Earliest start offset for the given page, measured from the start of
    /// the fan-out
    pub fn stagger_for(&self, page: u64) -> Duration {
        let unit = self.stagger.as_millis() as u64;
        Duration::from_millis(unit.saturating_mul(page))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            app_id: BARONY_APP_ID,
            api_base: "https://api.steampowered.com".to_string(),
            user_agent: "workshop/0.1.0".to_string(),
            stagger: Duration::from_millis(30),
            max_in_flight: 8,
        }
    }
}
