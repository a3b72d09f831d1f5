//! Core domain logic for pagepulse.
//!
//! This crate contains the pure, synchronous pieces shared by every view:
//! - Range filtering: selecting daily records inside an inclusive day range
//! - Aggregation: reducing daily records into a session-weighted summary
//! - Rollups: regrouping date → shift/category counter maps over a range
//! - Presets: the quick date windows from the range picker
//! - Watchlist: the ordered set of watched commenters
//!
//! Nothing here performs I/O; persistence and document loading live in
//! `pagepulse-data`.

mod aggregate;
mod filter;
mod model;
mod preset;
mod rollup;
mod shift;
mod watchlist;

pub use aggregate::aggregate;
pub use filter::filter_by_range;
pub use model::{AggregateSummary, DailyStat, DateRange, ShiftCounters};
pub use preset::Preset;
pub use rollup::{DailyGroupStats, ShiftRollup, rollup_by_category, rollup_by_shift};
pub use shift::{Shift, UnknownShift};
pub use watchlist::{Watchlist, WatchlistEntry};
