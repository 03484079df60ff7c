//! CSV feed mapping for the two published spreadsheet feeds.
//!
//! The donations feed has one row per contribution with a
//! currency-formatted amount column; the config feed is a single row of
//! campaign parameters. Donation rows that fail to parse are skipped and
//! counted so one bad cell never takes down the whole listing. The config
//! row is all-or-nothing: there is no useful partial config.

#[cfg(test)]
mod feed_tests;

use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pledge_types::{CampaignConfig, Donation};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed: {0}")]
    Csv(#[from] csv::Error),
    #[error("config feed has no data rows")]
    EmptyConfig,
    #[error("config field `{field}` is malformed: `{value}`")]
    BadConfigField { field: &'static str, value: String },
}

/// Parsed donations feed plus the count of rows that were rejected.
#[derive(Debug, Clone, Default)]
pub struct DonationFeed {
    pub donations: Vec<Donation>,
    /// Rows skipped because of a missing name, unparseable or negative
    /// amount, or unparseable date
    pub skipped: usize,
}

/// Raw donations-feed row, addressed by header name.
#[derive(Debug, Deserialize)]
struct DonationRow {
    name: String,
    #[serde(default)]
    zeta: String,
    amount: String,
    date: String,
}

/// Raw config-feed row. Headers use the spreadsheet's camelCase names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigRow {
    donation_goal: String,
    deadline: String,
    #[serde(default)]
    more_info: String,
    #[serde(default)]
    paypal_email: String,
    #[serde(default)]
    venmo_user: String,
    #[serde(default)]
    zelle_email: String,
    #[serde(default)]
    mail_check_address: String,
}

/// Parse the donations feed, skipping and counting malformed rows.
pub fn parse_donations<R: Read>(reader: R) -> Result<DonationFeed, FeedError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut feed = DonationFeed::default();

    for (idx, row) in csv_reader.deserialize::<DonationRow>().enumerate() {
        // 1-based feed line, counting the header row.
        let line = idx + 2;
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                tracing::warn!(line, %error, "skipping unreadable donation row");
                feed.skipped += 1;
                continue;
            }
        };
        match map_donation(row) {
            Ok(donation) => feed.donations.push(donation),
            Err(reason) => {
                tracing::warn!(line, reason, "skipping malformed donation row");
                feed.skipped += 1;
            }
        }
    }

    Ok(feed)
}

/// Parse the single-row config feed.
pub fn parse_config<R: Read>(reader: R) -> Result<CampaignConfig, FeedError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let row: ConfigRow = csv_reader
        .deserialize()
        .next()
        .ok_or(FeedError::EmptyConfig)??;

    let donation_goal =
        parse_amount(&row.donation_goal).ok_or_else(|| FeedError::BadConfigField {
            field: "donationGoal",
            value: row.donation_goal.clone(),
        })?;
    let deadline = parse_deadline(&row.deadline).ok_or_else(|| FeedError::BadConfigField {
        field: "deadline",
        value: row.deadline.clone(),
    })?;

    Ok(CampaignConfig {
        donation_goal,
        deadline,
        more_info: row.more_info,
        paypal_email: row.paypal_email,
        venmo_user: row.venmo_user,
        zelle_email: row.zelle_email,
        mail_check_address: row.mail_check_address,
    })
}

fn map_donation(row: DonationRow) -> Result<Donation, &'static str> {
    let name = row.name.trim();
    if name.is_empty() {
        return Err("empty name");
    }
    let amount = parse_amount(&row.amount).ok_or("unparseable amount")?;
    if amount < 0.0 {
        return Err("negative amount");
    }
    let date = parse_feed_date(&row.date).ok_or("unparseable date")?;
    let zeta = row.zeta.trim();

    Ok(Donation {
        name: name.to_string(),
        zeta: (!zeta.is_empty()).then(|| zeta.to_string()),
        amount,
        date,
    })
}

/// Parse a currency-formatted feed value (`$1,234.56`) as a decimal.
fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    // Thousands separators would truncate a plain float parse.
    let cleaned = trimmed.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Date formats the spreadsheet emits, most common first.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y"];

const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Parse a deadline with an optional time-of-day; a bare date means
/// midnight at the start of that day.
fn parse_deadline(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| parse_feed_date(raw).map(|date| date.and_time(NaiveTime::MIN)))
}
