pub mod aggregate;
pub mod countdown;
pub mod feed;
pub mod tiers;

// Re-exports for convenience
pub use aggregate::{
    TierBucket, amount_range, by_recency, by_tier, donor_count, progress_fraction, total,
};
pub use countdown::{Countdown, TimeRemaining, time_remaining};
pub use feed::{DonationFeed, FeedError, parse_config, parse_donations};
pub use tiers::{DonationTier, TIERS, tier_of};
