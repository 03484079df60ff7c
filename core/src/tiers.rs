//! Fixed donation tier table.
//!
//! Four contiguous monetary brackets covering `[0, ∞)`, ordered highest
//! first for display. Boundaries are campaign constants, not runtime
//! configuration.

/// A monetary bracket used to group donations for display.
///
/// The interval is half-open: a donation belongs to the tier when
/// `min <= amount < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationTier {
    pub label: &'static str,
    /// Inclusive lower bound in dollars
    pub min: f64,
    /// Exclusive upper bound in dollars
    pub max: f64,
    /// Human-readable range shown next to the label
    pub details: &'static str,
    /// Display color as hex RGB; `None` uses the default text color
    pub color: Option<&'static str>,
}

/// All tiers, highest first. Contiguous and exhaustive over `[0, ∞)`.
pub const TIERS: [DonationTier; 4] = [
    DonationTier {
        label: "Gold",
        min: 300.0,
        max: f64::INFINITY,
        details: "$300+",
        color: Some("#FFD133"),
    },
    DonationTier {
        label: "Green",
        min: 100.0,
        max: 300.0,
        details: "$100 - $299",
        color: Some("#046B37"),
    },
    DonationTier {
        label: "Purple",
        min: 50.0,
        max: 100.0,
        details: "$50 - $99",
        color: Some("#5E266D"),
    },
    DonationTier {
        label: "Brotherhood",
        min: 0.0,
        max: 50.0,
        details: "$1 - $49",
        color: None,
    },
];

/// Index into [`TIERS`] for an amount.
///
/// The feed invariant keeps amounts non-negative; anything that somehow
/// slips below zero lands in the lowest tier rather than panicking.
pub(crate) fn tier_index(amount: f64) -> usize {
    TIERS
        .iter()
        .position(|tier| amount >= tier.min && amount < tier.max)
        .unwrap_or(TIERS.len() - 1)
}

/// Select the unique tier whose interval contains `amount`.
pub fn tier_of(amount: f64) -> &'static DonationTier {
    &TIERS[tier_index(amount)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_contiguous_and_exhaustive() {
        // Highest-first ordering: each tier's max meets the previous min.
        for pair in TIERS.windows(2) {
            assert_eq!(pair[1].max, pair[0].min);
        }
        assert_eq!(TIERS[TIERS.len() - 1].min, 0.0);
        assert_eq!(TIERS[0].max, f64::INFINITY);
    }

    #[test]
    fn every_amount_matches_exactly_one_tier() {
        for amount in [0.0, 0.01, 25.0, 49.99, 50.0, 99.99, 100.0, 299.99, 300.0, 1_000_000.0] {
            let matching = TIERS
                .iter()
                .filter(|tier| amount >= tier.min && amount < tier.max)
                .count();
            assert_eq!(matching, 1, "amount {amount} matched {matching} tiers");
        }
    }

    #[test]
    fn boundary_amounts_land_in_the_upper_tier() {
        assert_eq!(tier_of(300.0).label, "Gold");
        assert_eq!(tier_of(299.99).label, "Green");
        assert_eq!(tier_of(100.0).label, "Green");
        assert_eq!(tier_of(50.0).label, "Purple");
        assert_eq!(tier_of(49.99).label, "Brotherhood");
        assert_eq!(tier_of(0.0).label, "Brotherhood");
    }
}
