//! Deadline countdown decomposition.
//!
//! Pure calculation of the time remaining until the campaign deadline,
//! broken into display units. The calculator owns no timer: the
//! presentation layer re-invokes it on a 1-second cadence while a
//! countdown view is live and stops the cadence when the view goes away.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Seconds in one year under the fixed 365.25-day convention.
///
/// Deliberately approximates calendar years without leap-year
/// bookkeeping; over multi-year spans the decomposition can drift by up
/// to about a day.
pub const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Remaining time split into display units, each the remainder after
/// removing the larger units (so `days` is days-within-the-year, not
/// total days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// Reconstruct the total whole-second span this decomposition covers.
    pub fn total_seconds(&self) -> u64 {
        self.years * SECONDS_PER_YEAR as u64
            + self.days * SECONDS_PER_DAY as u64
            + self.hours * SECONDS_PER_HOUR as u64
            + self.minutes * SECONDS_PER_MINUTE as u64
            + self.seconds
    }
}

/// Countdown state: still running, or past the deadline.
///
/// `Expired` is a distinct terminal value rather than an all-zero
/// [`TimeRemaining`], so callers can tell "about to hit zero" apart from
/// "already ended".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Countdown {
    Remaining(TimeRemaining),
    Expired,
}

impl Countdown {
    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

/// Compute the time remaining between `now` and `target`.
///
/// Greedy decomposition from years down to seconds; each unit is only
/// reduced while the remainder still holds at least one of it, so a
/// 30-second countdown reports zeros for every larger unit. Sub-second
/// precision is kept internally and floored at the seconds boundary.
pub fn time_remaining(target: NaiveDateTime, now: NaiveDateTime) -> Countdown {
    let mut diff = (target - now).num_milliseconds() as f64 / 1_000.0;
    if diff <= 0.0 {
        return Countdown::Expired;
    }

    let mut left = TimeRemaining::default();
    if diff >= SECONDS_PER_YEAR {
        left.years = (diff / SECONDS_PER_YEAR).floor() as u64;
        diff -= left.years as f64 * SECONDS_PER_YEAR;
    }
    if diff >= SECONDS_PER_DAY {
        left.days = (diff / SECONDS_PER_DAY).floor() as u64;
        diff -= left.days as f64 * SECONDS_PER_DAY;
    }
    if diff >= SECONDS_PER_HOUR {
        left.hours = (diff / SECONDS_PER_HOUR).floor() as u64;
        diff -= left.hours as f64 * SECONDS_PER_HOUR;
    }
    if diff >= SECONDS_PER_MINUTE {
        left.minutes = (diff / SECONDS_PER_MINUTE).floor() as u64;
        diff -= left.minutes as f64 * SECONDS_PER_MINUTE;
    }
    left.seconds = diff.floor() as u64;

    Countdown::Remaining(left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 9, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn one_day_one_hour_one_minute_one_second() {
        let now = base();
        let target = now + Duration::seconds(90_061);
        assert_eq!(
            time_remaining(target, now),
            Countdown::Remaining(TimeRemaining {
                years: 0,
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            })
        );
    }

    #[test]
    fn past_deadline_is_expired() {
        let now = base();
        assert_eq!(time_remaining(now - Duration::seconds(1), now), Countdown::Expired);
        assert_eq!(time_remaining(now, now), Countdown::Expired);
    }

    #[test]
    fn short_countdown_leaves_larger_units_zero() {
        let now = base();
        let target = now + Duration::seconds(30);
        assert_eq!(
            time_remaining(target, now),
            Countdown::Remaining(TimeRemaining {
                seconds: 30,
                ..TimeRemaining::default()
            })
        );
    }

    #[test]
    fn reconstruction_stays_within_one_second() {
        let now = base();
        for span in [1i64, 59, 61, 3_599, 3_601, 86_399, 90_061, 31_557_600, 40_000_000] {
            let target = now + Duration::seconds(span);
            let Countdown::Remaining(left) = time_remaining(target, now) else {
                panic!("span {span} should not be expired");
            };
            let rebuilt = left.total_seconds() as i64;
            assert!((rebuilt - span).abs() <= 1, "span {span} rebuilt as {rebuilt}");
        }
    }

    #[test]
    fn reconstruction_decreases_as_now_advances() {
        let now = base();
        let target = now + Duration::seconds(90_061);
        let mut previous = u64::MAX;
        for tick in 0..10 {
            let Countdown::Remaining(left) = time_remaining(target, now + Duration::seconds(tick))
            else {
                panic!("still 25 hours out");
            };
            assert!(left.total_seconds() < previous);
            previous = left.total_seconds();
        }
    }

    #[test]
    fn multi_year_span_uses_fractional_year_length() {
        let now = base();
        // Two 365.25-day years plus one hour.
        let target = now + Duration::seconds(2 * 31_557_600 + 3_600);
        let Countdown::Remaining(left) = time_remaining(target, now) else {
            panic!("two years out");
        };
        assert_eq!(left.years, 2);
        assert_eq!(left.days, 0);
        assert_eq!(left.hours, 1);
    }
}
