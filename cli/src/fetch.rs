//! Concurrent retrieval of the two campaign feeds.
//!
//! The fetches are independent and unordered. The donations feed is
//! required: without it there is nothing to show. The config feed
//! degrades: donation views still render, progress reads as unknown and
//! the countdown is unavailable.

use pledge_core::feed::{DonationFeed, parse_config, parse_donations};
use pledge_types::CampaignConfig;

use crate::settings::FeedSettings;

/// Everything one load cycle produced.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub feed: DonationFeed,
    /// `None` until/unless the config feed loads and parses
    pub config: Option<CampaignConfig>,
}

pub async fn fetch_campaign(settings: &FeedSettings) -> Result<Campaign, String> {
    let client = reqwest::Client::new();
    let (donations_body, config_body) = tokio::join!(
        fetch_csv(&client, &settings.donations_url),
        fetch_csv(&client, &settings.config_url),
    );

    let donations_body =
        donations_body.map_err(|e| format!("donations feed unavailable: {e}"))?;
    let feed = parse_donations(donations_body.as_bytes()).map_err(|e| e.to_string())?;
    if feed.skipped > 0 {
        tracing::warn!(skipped = feed.skipped, "donation rows rejected during parse");
    }

    let config = match config_body {
        Ok(body) => match parse_config(body.as_bytes()) {
            Ok(config) => Some(config),
            Err(error) => {
                tracing::warn!(%error, "config feed malformed; progress and countdown unavailable");
                None
            }
        },
        Err(error) => {
            tracing::warn!(%error, "config feed unavailable; progress and countdown unavailable");
            None
        }
    };

    Ok(Campaign { feed, config })
}

async fn fetch_csv(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    client.get(url).send().await?.error_for_status()?.text().await
}
