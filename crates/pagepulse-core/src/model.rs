//! Daily record and summary types.

use serde::{Deserialize, Serialize};

/// One calendar day of activity across all pages, as emitted by the export
/// job. Records are immutable once loaded; absent counters default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    /// ISO `YYYY-MM-DD` day string.
    pub date: String,
    #[serde(default)]
    pub messages: u64,
    #[serde(default)]
    pub incoming: u64,
    #[serde(default)]
    pub outgoing: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub hidden: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub with_replies: u64,
    #[serde(default)]
    pub sessions: u64,
    /// Mean response time for the day, in seconds. `None` when the day
    /// carries no measured responses.
    #[serde(default)]
    pub avg_response_time: Option<f64>,
}

/// Bounds of the available data, supplied by the export job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub min_date: String,
    pub max_date: String,
}

/// Message counters carried by one shift (or category) bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCounters {
    #[serde(default)]
    pub messages: u64,
    #[serde(default)]
    pub incoming: u64,
    #[serde(default)]
    pub outgoing: u64,
}

impl ShiftCounters {
    /// Adds another bucket's counters into this one.
    pub fn accumulate(&mut self, other: &Self) {
        self.messages = self.messages.saturating_add(other.messages);
        self.incoming = self.incoming.saturating_add(other.incoming);
        self.outgoing = self.outgoing.saturating_add(other.outgoing);
    }
}

/// Reduction of a set of daily records into a single summary.
///
/// Carries the same counters as [`DailyStat`] plus the weighted sums the
/// response-time average was computed from, so two disjoint summaries can be
/// recombined without re-averaging averages (see
/// [`AggregateSummary::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub messages: u64,
    pub incoming: u64,
    pub outgoing: u64,
    pub comments: u64,
    pub hidden: u64,
    pub replies: u64,
    pub with_replies: u64,
    pub sessions: u64,
    /// Sum of `avg_response_time * sessions` over days with a measured
    /// response time.
    pub response_time_sum: f64,
    /// Sum of `sessions` over days with a measured response time.
    pub response_time_count: u64,
    /// Session-weighted mean response time, rounded to whole seconds.
    /// `None` when no day in the set carried a response time.
    pub avg_response_time: Option<u64>,
}
