//! pagepulse CLI library.
//!
//! Renders the analytics export's views as terminal reports and manages the
//! local watchlist.

mod cli;
pub mod commands;
mod config;
pub mod render;

pub use cli::{Cli, Commands, PresetArg, RangeArgs, SortField, UsersAction, WatchAction};
pub use config::Config;
