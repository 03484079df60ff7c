//! pledge - donation campaign tracker CLI.
//!
//! Fetches the campaign's two published spreadsheet feeds and renders
//! fundraising progress, donor lists, the deadline countdown, and the
//! donation options panel.

mod commands;
mod fetch;
mod settings;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

use crate::fetch::fetch_campaign;
use crate::settings::FeedSettings;

#[derive(Parser)]
#[command(version, about = "Donation campaign tracker")]
struct Cli {
    /// Override the stored donations feed URL for this invocation
    #[arg(long, global = true)]
    donations_url: Option<String>,
    /// Override the stored config feed URL for this invocation
    #[arg(long, global = true)]
    config_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total raised, donor count, and goal progress
    Summary,
    /// Donor list, newest first
    Donors {
        /// Group donors into the fixed donation tiers instead
        #[arg(long)]
        by_tier: bool,
    },
    /// Time remaining until the campaign deadline
    Countdown {
        /// Re-render every second until the deadline passes
        #[arg(long)]
        watch: bool,
    },
    /// Payment options for making a donation
    Donate,
    /// Show the resolved feed settings
    Config,
    /// Persist new default feed URLs
    SetFeeds {
        #[arg(long)]
        donations_url: Option<String>,
        #[arg(long)]
        config_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();
    let settings = FeedSettings::load().with_overrides(cli.donations_url, cli.config_url);

    match cli.command {
        Commands::Config => {
            commands::show_settings(&settings);
            Ok(())
        }
        Commands::SetFeeds {
            donations_url,
            config_url,
        } => commands::set_feeds(donations_url, config_url),
        Commands::Summary => {
            let campaign = fetch_campaign(&settings).await?;
            commands::summary(&campaign);
            Ok(())
        }
        Commands::Donors { by_tier } => {
            let campaign = fetch_campaign(&settings).await?;
            commands::donors(&campaign, by_tier);
            Ok(())
        }
        Commands::Countdown { watch } => {
            let campaign = fetch_campaign(&settings).await?;
            let config = campaign
                .config
                .ok_or("config feed unavailable: no deadline to count down to")?;
            if watch {
                commands::countdown_watch(&config).await;
            } else {
                commands::countdown_once(&config);
            }
            Ok(())
        }
        Commands::Donate => {
            let campaign = fetch_campaign(&settings).await?;
            let config = campaign
                .config
                .ok_or("config feed unavailable: no payment destinations")?;
            commands::donate(&config);
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
