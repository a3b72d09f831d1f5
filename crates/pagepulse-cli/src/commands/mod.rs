//! CLI subcommand implementations.

pub mod dashboard;
pub mod messages;
pub mod pages;
pub mod report;
pub mod shifts;
pub mod users;
pub mod util;
pub mod watch;
