//! The analytics export document.

use std::collections::HashMap;
use std::path::Path;

use pagepulse_core::{DailyGroupStats, DailyStat, DateRange};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum rows returned by a commenter name search.
pub const SEARCH_LIMIT: usize = 50;

/// Errors loading the analytics document.
#[derive(Debug, Error)]
pub enum DataError {
    /// The document could not be read.
    #[error("failed to read analytics document: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON for the expected shape.
    #[error("invalid analytics document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Overall totals across the whole data range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
    pub messages: u64,
    pub sessions: u64,
    pub conversations: u64,
    pub pages: u64,
    /// Seconds.
    pub avg_response_time: Option<f64>,
    /// Seconds.
    pub avg_session_duration: Option<f64>,
}

/// Session performance for one shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftSessionRow {
    pub shift: String,
    pub sessions: u64,
    pub avg_response_time: Option<f64>,
    pub avg_duration: Option<f64>,
}

/// Message volume for one shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftMessageRow {
    pub shift: String,
    pub messages: u64,
    pub incoming: u64,
    pub outgoing: u64,
}

/// Comment counts for one shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftCommentRow {
    pub shift: String,
    pub total: u64,
    pub hidden: u64,
    pub replies: u64,
}

/// Received/sent volume for one shift timeframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeframeRow {
    pub shift: String,
    pub total: u64,
    pub received: u64,
    pub sent: u64,
    pub avg_response: Option<f64>,
}

/// A page's total message volume (top-pages chart input).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageVolume {
    pub name: String,
    pub messages: u64,
}

/// One point of the recent daily trend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendPoint {
    pub date: String,
    pub messages: u64,
}

/// Message volume for one hour of day (0–23).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HourlyPoint {
    pub hour: u8,
    pub messages: u64,
}

/// Incoming/outgoing split across the whole data range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageStats {
    pub incoming: u64,
    pub outgoing: u64,
}

/// Per-page performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageStat {
    pub page_id: String,
    pub name: String,
    pub messages: u64,
    pub sessions: u64,
    pub avg_response_time: Option<f64>,
    pub avg_duration: Option<f64>,
}

/// Per-category totals, including the producer-computed page count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryStat {
    pub category: String,
    /// Count of distinct pages in the category. Computed by the export job
    /// from raw page membership; never re-derived from summed counters.
    pub page_count: u64,
    pub messages: u64,
    pub sessions: u64,
}

/// Stacked per-category message volume keyed by shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryShiftRow {
    pub category: String,
    #[serde(rename = "Morning")]
    pub morning: u64,
    #[serde(rename = "Mid")]
    pub mid: u64,
    #[serde(rename = "Evening")]
    pub evening: u64,
}

/// One page × shift row of the management report input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageShiftRow {
    pub page_id: String,
    pub name: String,
    pub category: String,
    pub shift: String,
    pub messages: u64,
    pub incoming: u64,
    pub outgoing: u64,
    pub sessions: u64,
    pub avg_response_time: Option<f64>,
}

/// A user who has commented on at least one tracked page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Commenter {
    pub user_id: String,
    pub name: String,
    pub comment_count: u64,
    pub pages_commented: u64,
    pub first_comment: Option<String>,
    pub last_comment: Option<String>,
}

/// A single comment in a user's history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserComment {
    pub page_name: String,
    pub text: String,
    pub time: Option<String>,
}

/// The full analytics export, consumed wholesale at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsDoc {
    pub totals: Option<Totals>,
    pub shift_stats: Vec<ShiftSessionRow>,
    pub shift_messages: Vec<ShiftMessageRow>,
    pub shift_comments: Vec<ShiftCommentRow>,
    pub messages_by_timeframe: Vec<TimeframeRow>,
    pub top_pages: Vec<PageVolume>,
    pub daily_trend: Vec<TrendPoint>,
    pub daily_stats: Vec<DailyStat>,
    /// date → shift label → counters.
    pub daily_shift_stats: DailyGroupStats,
    /// date → category → counters.
    pub daily_category_stats: DailyGroupStats,
    pub date_range: Option<DateRange>,
    pub message_stats: Option<MessageStats>,
    pub hourly_distribution: Vec<HourlyPoint>,
    pub page_stats: Vec<PageStat>,
    pub category_stats: Vec<CategoryStat>,
    pub category_shift_stats: Vec<CategoryShiftRow>,
    pub page_shift_performance: Vec<PageShiftRow>,
    pub all_commenters: Vec<Commenter>,
    pub top_commenters: Vec<Commenter>,
    /// userId → comment history.
    pub user_comments: HashMap<String, Vec<UserComment>>,
    /// Timestamp of the last export run.
    pub last_sync: Option<String>,
}

impl AnalyticsDoc {
    /// Loads and parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path)?;
        let doc = serde_json::from_str(&raw)?;
        Ok(doc)
    }

    /// Looks up a commenter by stable id.
    #[must_use]
    pub fn find_commenter(&self, user_id: &str) -> Option<&Commenter> {
        self.all_commenters.iter().find(|c| c.user_id == user_id)
    }

    /// Case-insensitive name search over all commenters, capped at
    /// [`SEARCH_LIMIT`] rows. A blank query matches nothing.
    #[must_use]
    pub fn search_commenters(&self, query: &str) -> Vec<&Commenter> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.all_commenters
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Comment history for a user, empty when the export carries none.
    #[must_use]
    pub fn comments_for(&self, user_id: &str) -> &[UserComment] {
        self.user_comments
            .get(user_id)
            .map_or(&[], Vec::as_slice)
    }
}
