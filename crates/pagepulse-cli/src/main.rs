use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagepulse_cli::commands::{dashboard, messages, pages, report, shifts, users, watch};
use pagepulse_cli::{Cli, Commands, Config, WatchAction};
use pagepulse_data::{AnalyticsDoc, JsonFileStore, PersistedWatchlist};

/// Loads the analytics export, or prints the no-data banner.
///
/// A missing or unreadable export is an expected state (the sync job has
/// not run yet), not a failure, so the process still exits zero.
fn load_doc(config: &Config) -> Option<AnalyticsDoc> {
    match AnalyticsDoc::load(&config.analytics_path) {
        Ok(doc) => Some(doc),
        Err(err) => {
            tracing::warn!(
                path = %config.analytics_path.display(),
                %err,
                "could not load analytics export"
            );
            println!("No data available. Run the sync script first.");
            None
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn open_watchlist(config: &Config) -> PersistedWatchlist<JsonFileStore> {
    PersistedWatchlist::open(JsonFileStore::new(config.watchlist_path.clone()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Dashboard { range }) => {
            let config = load_config(cli.config.as_deref())?;
            if let Some(doc) = load_doc(&config) {
                dashboard::run(&doc, range)?;
            }
        }
        Some(Commands::Messages) => {
            let config = load_config(cli.config.as_deref())?;
            if let Some(doc) = load_doc(&config) {
                messages::run(&doc)?;
            }
        }
        Some(Commands::Shifts { range }) => {
            let config = load_config(cli.config.as_deref())?;
            if let Some(doc) = load_doc(&config) {
                shifts::run(&doc, range)?;
            }
        }
        Some(Commands::Pages { sort, asc }) => {
            let config = load_config(cli.config.as_deref())?;
            if let Some(doc) = load_doc(&config) {
                pages::run(&doc, *sort, *asc)?;
            }
        }
        Some(Commands::Report { category }) => {
            let config = load_config(cli.config.as_deref())?;
            if let Some(doc) = load_doc(&config) {
                report::run(&doc, category.as_deref())?;
            }
        }
        Some(Commands::Users { action }) => {
            let config = load_config(cli.config.as_deref())?;
            if let Some(doc) = load_doc(&config) {
                let watchlist = open_watchlist(&config);
                users::run(&doc, watchlist.list(), action.as_ref())?;
            }
        }
        Some(Commands::Watch { action }) => {
            let config = load_config(cli.config.as_deref())?;
            let mut watchlist = open_watchlist(&config);
            match action {
                // Removal works without an export; the watchlist is local state.
                WatchAction::Remove { .. } => {
                    watch::run(&AnalyticsDoc::default(), &mut watchlist, action)?;
                }
                WatchAction::List | WatchAction::Add { .. } => {
                    if let Some(doc) = load_doc(&config) {
                        watch::run(&doc, &mut watchlist, action)?;
                    }
                }
            }
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
