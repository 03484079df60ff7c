//! Donation aggregation.
//!
//! Totals, donor counts, amount range, goal progress, and the two display
//! orderings (tier partition and recency). All functions read a
//! feed-ordered slice and never mutate it; sorts are stable so equal-key
//! records keep feed order and output stays deterministic.

use pledge_types::Donation;

use crate::tiers::{DonationTier, TIERS, tier_index};

/// Sum of all donation amounts; `0.0` for an empty slice.
pub fn total(donations: &[Donation]) -> f64 {
    donations.iter().map(|d| d.amount).sum()
}

/// Number of donation records. Duplicate names count separately.
pub fn donor_count(donations: &[Donation]) -> usize {
    donations.len()
}

/// Minimum and maximum donation amount, or `None` for an empty slice.
pub fn amount_range(donations: &[Donation]) -> Option<(f64, f64)> {
    let mut amounts = donations.iter().map(|d| d.amount);
    let first = amounts.next()?;
    let (min, max) = amounts.fold((first, first), |(min, max), amount| {
        (min.min(amount), max.max(amount))
    });
    Some((min, max))
}

/// Fraction of the goal raised so far.
///
/// Returns `None` when the goal is zero or negative, which covers both a
/// bad config row and the window before the config feed has loaded.
/// Callers render that as "progress unknown" instead of a division
/// artifact.
pub fn progress_fraction(total: f64, goal: f64) -> Option<f64> {
    if goal > 0.0 { Some(total / goal) } else { None }
}

/// One tier's portion of the donation list, sorted descending by amount.
#[derive(Debug, Clone)]
pub struct TierBucket<'a> {
    pub tier: &'static DonationTier,
    pub donations: Vec<&'a Donation>,
}

impl TierBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.donations.is_empty()
    }
}

/// Partition donations into the fixed tiers, highest tier first.
///
/// Every input donation lands in exactly one bucket. Within a bucket the
/// order is descending amount; ties keep feed order.
pub fn by_tier(donations: &[Donation]) -> Vec<TierBucket<'_>> {
    let mut buckets: Vec<TierBucket<'_>> = TIERS
        .iter()
        .map(|tier| TierBucket {
            tier,
            donations: Vec::new(),
        })
        .collect();

    for donation in donations {
        buckets[tier_index(donation.amount)].donations.push(donation);
    }
    for bucket in &mut buckets {
        bucket
            .donations
            .sort_by(|a, b| b.amount.total_cmp(&a.amount));
    }
    buckets
}

/// Full donation list sorted descending by date; ties keep feed order.
pub fn by_recency(donations: &[Donation]) -> Vec<&Donation> {
    let mut ordered: Vec<&Donation> = donations.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}
