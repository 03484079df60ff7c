//! Shared data types for the pledge campaign tracker.
//!
//! These are the plain records exchanged between the feed layer, the
//! aggregation core, and the presentation layer. They carry no behavior
//! beyond construction helpers; all computation lives in `pledge-core`.

pub mod formatting;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single donor contribution, as mapped from one donations-feed row.
///
/// Immutable once constructed; the feed mapper is the sole producer and
/// guarantees `amount >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Donor display name
    pub name: String,
    /// Optional chapter affiliation tag (empty feed cells become `None`)
    pub zeta: Option<String>,
    /// Contribution amount in dollars, never negative
    pub amount: f64,
    /// Calendar date of the contribution
    pub date: NaiveDate,
}

/// Campaign-wide parameters, mapped from the single config-feed row.
///
/// Payment destinations are raw identifiers (email addresses, handles);
/// building outbound payment URLs from them is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Fundraising target in dollars, expected to be positive
    pub donation_goal: f64,
    /// Deadline the countdown runs against (date-only feed values mean
    /// midnight at the start of that day)
    pub deadline: NaiveDateTime,
    /// Long-form campaign description shown in the info view
    pub more_info: String,
    pub paypal_email: String,
    pub venmo_user: String,
    pub zelle_email: String,
    /// Multi-line mailing address for cash/check donations
    pub mail_check_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donation_serde_round_trip() {
        let donation = Donation {
            name: "Galen Ayder".to_string(),
            zeta: Some("Theta".to_string()),
            amount: 125.0,
            date: NaiveDate::from_ymd_opt(2023, 9, 14).unwrap(),
        };
        let json = serde_json::to_string(&donation).unwrap();
        let back: Donation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, donation);
    }

    #[test]
    fn absent_zeta_round_trips_as_none() {
        let json = r#"{"name":"Anon","zeta":null,"amount":10.0,"date":"2023-10-01"}"#;
        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.zeta, None);
    }
}
