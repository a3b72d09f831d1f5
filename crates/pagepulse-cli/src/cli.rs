//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Terminal dashboard for a multi-page chat/comment operation.
///
/// Reads the analytics export produced by the sync job and renders the
/// dashboard views as plain-text reports.
#[derive(Debug, Parser)]
#[command(name = "pagepulse", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Overall totals, shift response times, top pages, and the daily trend.
    Dashboard {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Message volume metrics and the hourly distribution.
    Messages,

    /// Per-shift performance breakdown.
    Shifts {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Per-page performance table.
    Pages {
        /// Column to sort by.
        #[arg(long, value_enum, default_value_t = SortField::Messages)]
        sort: SortField,

        /// Sort ascending instead of descending.
        #[arg(long)]
        asc: bool,
    },

    /// Management report: shift performance by page.
    Report {
        /// Only include pages in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Commenter tracking: leaderboard, search, and per-user detail.
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Manage the local watchlist.
    Watch {
        #[command(subcommand)]
        action: WatchAction,
    },
}

/// Date filter shared by the range-aware views.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Start of the date filter (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub from: Option<String>,

    /// End of the date filter (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub to: Option<String>,

    /// Quick range preset; overrides --from/--to.
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,
}

impl RangeArgs {
    /// Whether any filter flag was given at all.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.preset.is_some() || self.from.is_some() || self.to.is_some()
    }
}

/// Quick date presets from the range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Today,
    Last7,
    Last30,
    All,
}

impl From<PresetArg> for pagepulse_core::Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Today => Self::Today,
            PresetArg::Last7 => Self::Last7Days,
            PresetArg::Last30 => Self::Last30Days,
            PresetArg::All => Self::AllTime,
        }
    }
}

/// Sortable columns of the page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Messages,
    Sessions,
    Response,
    Duration,
}

/// Commenter tracking views.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// Ranked top commenters (the default).
    Leaderboard,

    /// Search commenters by name.
    Search {
        /// Case-insensitive name fragment.
        query: String,
    },

    /// Full detail for one commenter, including recent comments.
    Show {
        /// The commenter's stable id.
        user_id: String,
    },
}

/// Watchlist operations.
#[derive(Debug, Subcommand)]
pub enum WatchAction {
    /// Show the watchlist joined with commenter data.
    List,

    /// Add a commenter to the watchlist.
    Add {
        /// The commenter's stable id.
        user_id: String,
    },

    /// Remove a commenter from the watchlist.
    Remove {
        /// The commenter's stable id.
        user_id: String,
    },
}
