//! Terminal rendering for each subcommand.

use std::io::Write;
use std::time::Duration;

use chrono::Local;
use pledge_core::{
    Countdown, TimeRemaining, amount_range, by_recency, by_tier, donor_count, progress_fraction,
    time_remaining, total,
};
use pledge_types::CampaignConfig;
use pledge_types::formatting::{format_money, format_percent};

use crate::fetch::Campaign;
use crate::settings::FeedSettings;

/// Total raised, goal, donor count, amount range, and progress.
pub fn summary(campaign: &Campaign) {
    let donations = &campaign.feed.donations;
    let raised = total(donations);

    println!("{}", format_money(raised));
    match &campaign.config {
        Some(config) => println!("Raised of {}", format_money(config.donation_goal)),
        None => println!("Raised (goal unknown)"),
    }
    println!("Total donors: {}", donor_count(donations));
    if let Some((min, max)) = amount_range(donations) {
        println!(
            "Smallest / largest: {} / {}",
            format_money(min),
            format_money(max)
        );
    }

    let goal = campaign
        .config
        .as_ref()
        .map(|config| config.donation_goal)
        .unwrap_or(0.0);
    match progress_fraction(raised, goal) {
        Some(fraction) => println!("Progress: {}", format_percent(fraction)),
        None => println!("Progress: unknown (goal not loaded)"),
    }

    if campaign.feed.skipped > 0 {
        println!(
            "Note: {} feed row(s) could not be parsed",
            campaign.feed.skipped
        );
    }
}

/// Donor list, newest first, or grouped into tiers.
pub fn donors(campaign: &Campaign, group_by_tier: bool) {
    let donations = &campaign.feed.donations;
    if donations.is_empty() {
        println!("No donations yet.");
        return;
    }

    if group_by_tier {
        for bucket in by_tier(donations) {
            // Empty brackets add nothing to the listing.
            if bucket.is_empty() {
                continue;
            }
            println!(
                "{} ({})  {}",
                bucket.tier.label,
                bucket.donations.len(),
                bucket.tier.details
            );
            for donation in &bucket.donations {
                let zeta = donation
                    .zeta
                    .as_deref()
                    .map(|z| format!(" ({z})"))
                    .unwrap_or_default();
                println!(
                    "  {:<30} {:>12}",
                    format!("{}{zeta}", donation.name),
                    format_money(donation.amount)
                );
            }
            println!();
        }
    } else {
        println!("{:<12} {:<24} {:<12} {:>12}", "Date", "Name", "Zeta", "Amount");
        for donation in by_recency(donations) {
            println!(
                "{:<12} {:<24} {:<12} {:>12}",
                donation.date.format("%m/%d/%Y"),
                donation.name,
                donation.zeta.as_deref().unwrap_or(""),
                format_money(donation.amount)
            );
        }
    }
}

/// One-shot countdown render.
pub fn countdown_once(config: &CampaignConfig) {
    match time_remaining(config.deadline, Local::now().naive_local()) {
        Countdown::Remaining(left) => println!("{}", render_remaining(&left)),
        Countdown::Expired => println!("The campaign has ended."),
    }
}

/// Live countdown, re-rendered once per second until the deadline passes.
///
/// The cadence lives here, never in the calculator.
pub async fn countdown_watch(config: &CampaignConfig) {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        ticker.tick().await;
        match time_remaining(config.deadline, Local::now().naive_local()) {
            Countdown::Remaining(left) => {
                print!("\r{}    ", render_remaining(&left));
                let _ = std::io::stdout().flush();
            }
            Countdown::Expired => {
                println!("\rThe campaign has ended.");
                break;
            }
        }
    }
}

fn render_remaining(left: &TimeRemaining) -> String {
    let mut parts = Vec::with_capacity(5);
    if left.years > 0 {
        parts.push(format!("{} years", left.years));
    }
    parts.push(format!("{} days", left.days));
    parts.push(format!("{} hours", left.hours));
    parts.push(format!("{} minutes", left.minutes));
    parts.push(format!("{} seconds", left.seconds));
    parts.join(", ")
}

/// Payment options. The core exposes raw identifiers; the URL templates
/// belong here.
pub fn donate(config: &CampaignConfig) {
    if !config.paypal_email.is_empty() {
        println!(
            "PayPal: https://www.paypal.com/donate?business={}&item_name=Donation&currency_code=USD",
            config.paypal_email
        );
    }
    if !config.venmo_user.is_empty() {
        println!("Venmo:  https://venmo.com/{}", config.venmo_user);
    }
    if !config.zelle_email.is_empty() {
        println!("Zelle:  {}", config.zelle_email);
    }
    if !config.mail_check_address.is_empty() {
        println!("Cash / check, mail to:\n{}", config.mail_check_address);
    }
    if !config.more_info.is_empty() {
        println!("\n{}", config.more_info);
    }
}

pub fn show_settings(settings: &FeedSettings) {
    println!("donations feed: {}", settings.donations_url);
    println!("config feed:    {}", settings.config_url);
}

pub fn set_feeds(
    donations_url: Option<String>,
    config_url: Option<String>,
) -> Result<(), String> {
    let settings = FeedSettings::load().with_overrides(donations_url, config_url);
    settings.store()?;
    show_settings(&settings);
    Ok(())
}
