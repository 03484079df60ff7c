//! Feed URL settings, persisted in the platform config directory.

use serde::{Deserialize, Serialize};

const APP_NAME: &str = "pledge";

/// URLs of the two published spreadsheet CSV feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    pub donations_url: String,
    pub config_url: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        // The campaign sheet publishes each tab as its own CSV endpoint.
        Self {
            donations_url: "https://docs.google.com/spreadsheets/d/e/2PACX-1vS1gk8NEzkYM4dW211o-knOAufdli-gEoZLaunhkfDrSPCm0iDa4HEo92br6jP7Q0JRkS0i_HB7mK7P/pub?gid=0&single=true&output=csv".to_string(),
            config_url: "https://docs.google.com/spreadsheets/d/e/2PACX-1vS1gk8NEzkYM4dW211o-knOAufdli-gEoZLaunhkfDrSPCm0iDa4HEo92br6jP7Q0JRkS0i_HB7mK7P/pub?gid=1502649564&single=true&output=csv".to_string(),
        }
    }
}

impl FeedSettings {
    pub fn load() -> Self {
        confy::load(APP_NAME, None).unwrap_or_default()
    }

    pub fn store(&self) -> Result<(), String> {
        confy::store(APP_NAME, None, self).map_err(|e| e.to_string())
    }

    /// Apply per-invocation URL overrides without touching the stored file.
    pub fn with_overrides(
        mut self,
        donations_url: Option<String>,
        config_url: Option<String>,
    ) -> Self {
        if let Some(url) = donations_url {
            self.donations_url = url;
        }
        if let Some(url) = config_url {
            self.config_url = url;
        }
        self
    }
}
