mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use evently_core::category::CategoryFilter;
use evently_core::config::EventlyConfig;
use evently_core::dates;
use evently_core::query::{EventQuery, PriceTier};
use evently_core::session::EventSession;
use evently_core::store::FileStore;
use evently_core::user::ProfileTab;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Discover local events, RSVP and keep track of your favorites")]
struct Cli {
    /// Use this directory for event storage instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = dates::parse_date)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trending events and the full list, optionally for one category
    Home {
        /// Category key, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Search titles, descriptions, venues and tags
    Search {
        /// Text to look for (empty matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Category key, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// all, free or paid
        #[arg(short, long, default_value = "all")]
        price: PriceTier,
    },
    /// Month grid plus upcoming events
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = dates::parse_month)]
        month: Option<NaiveDate>,

        /// List the events on this day (YYYY-MM-DD)
        #[arg(short, long, value_parser = dates::parse_date)]
        date: Option<NaiveDate>,
    },
    /// Your profile with RSVP'd, favorite and attended events
    Profile {
        /// rsvp, favorites or attended
        #[arg(short, long, default_value = "rsvp")]
        tab: ProfileTab,
    },
    /// Details for one event
    Show { id: String },
    /// Toggle an event as favorite
    Favorite { id: String },
    /// Toggle your RSVP for an event
    Rsvp { id: String },
    /// Reload events from storage
    Refresh {
        /// Replace stored events with the built-in ones
        #[arg(long)]
        reset: bool,
    },
    /// List event categories
    Categories,
    /// Show or change configuration
    Config {
        /// Persist a new data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Persist a new refresh delay in milliseconds
        #[arg(long)]
        set_refresh_delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = EventlyConfig::load()?;
    let today = cli.today.unwrap_or_else(dates::today);

    let data_path = cli.data_dir.clone().unwrap_or_else(|| config.data_path());
    let open_session = || EventSession::open(FileStore::new(data_path.clone()));

    match cli.command {
        Commands::Home { category } => commands::home::run(&open_session(), category, today),
        Commands::Search {
            query,
            category,
            price,
        } => {
            let query = EventQuery::new(query)
                .with_category(category)
                .with_price(price);
            commands::search::run(&open_session(), &query)
        }
        Commands::Calendar { month, date } => {
            let reference = month.unwrap_or(today);
            commands::calendar::run(&open_session(), reference, date, today)
        }
        Commands::Profile { tab } => commands::profile::run(&open_session(), tab, today),
        Commands::Show { id } => commands::show::run(&open_session(), &id),
        Commands::Favorite { id } => commands::toggle::favorite(&mut open_session(), &id),
        Commands::Rsvp { id } => commands::toggle::rsvp(&mut open_session(), &id),
        Commands::Refresh { reset } => {
            commands::refresh::run(&mut open_session(), config.refresh_delay(), reset).await
        }
        Commands::Categories => commands::categories::run(&open_session(), today),
        Commands::Config {
            set_data_dir,
            set_refresh_delay_ms,
        } => commands::config::run(config, set_data_dir, set_refresh_delay_ms),
    }
}

/// Log to stderr, filtered by EVENTLY_LOG (falls back to RUST_LOG, then "warn").
fn init_tracing() {
    let filter = EnvFilter::try_from_env("EVENTLY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
