//! Data layer for pagepulse.
//!
//! Provides the analytics export document (`analytics.json`) as typed
//! structs, the derived groupings the management report needs, and the
//! pluggable watchlist persistence backend.
//!
//! Every document field is optional or defaulted: the export contract is
//! "emit valid JSON matching the shape, or omit the file entirely", and a
//! partially-populated document must degrade to empty/zero rendering rather
//! than fail to parse.

mod document;
mod report;
mod store;

pub use document::{
    AnalyticsDoc, CategoryShiftRow, CategoryStat, Commenter, DataError, HourlyPoint, MessageStats,
    PageShiftRow, PageStat, PageVolume, ShiftCommentRow, ShiftMessageRow, ShiftSessionRow,
    TimeframeRow, Totals, TrendPoint, UserComment,
};
pub use report::{PageGroup, PageTotals, grand_totals, group_pages, shift_summary};
pub use store::{JsonFileStore, MemoryStore, PersistedWatchlist, StoreError, WatchlistStore};
