//! Dashboard command: the overview page of the analytics export.
//!
//! Unfiltered, it renders the export's precomputed overview blocks
//! verbatim. With a date filter it recomputes the totals from the daily
//! series and regroups the per-shift message counters, because the export's
//! precomputed blocks cover the whole data range only.

use std::fmt::Write;

use anyhow::Result;
use chrono::Utc;
use pagepulse_core::{Shift, aggregate, filter_by_range, rollup_by_shift};
use pagepulse_data::AnalyticsDoc;

use crate::cli::RangeArgs;
use crate::commands::util::{range_label, resolve_range};
use crate::render::{bar, format_duration, format_number, format_time_ago};

const TOP_PAGES_SHOWN: usize = 8;

/// Formats the unfiltered overview from the export's precomputed blocks.
pub fn format_overview(doc: &AnalyticsDoc) -> String {
    let mut out = String::new();

    writeln!(out, "PAGE ANALYTICS DASHBOARD").unwrap();
    writeln!(out, "========================").unwrap();
    writeln!(
        out,
        "Last sync: {}",
        format_time_ago(doc.last_sync.as_deref(), Utc::now())
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(out, "TOTALS").unwrap();
    writeln!(out, "──────").unwrap();
    let totals = doc.totals.clone().unwrap_or_default();
    writeln!(out, "Messages:       {}", format_number(totals.messages)).unwrap();
    writeln!(out, "Sessions:       {}", format_number(totals.sessions)).unwrap();
    writeln!(
        out,
        "Conversations:  {}",
        format_number(totals.conversations)
    )
    .unwrap();
    writeln!(out, "Pages:          {}", format_number(totals.pages)).unwrap();
    writeln!(
        out,
        "Avg response:   {}",
        format_duration(totals.avg_response_time)
    )
    .unwrap();
    writeln!(
        out,
        "Avg session:    {}",
        format_duration(totals.avg_session_duration)
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(out, "SHIFT PERFORMANCE").unwrap();
    writeln!(out, "─────────────────").unwrap();
    if doc.shift_stats.is_empty() {
        writeln!(out, "(no shift data)").unwrap();
    }
    for row in &doc.shift_stats {
        writeln!(
            out,
            "{:<8} sessions {:>7}  response {:>7}  duration {:>7}",
            row.shift,
            format_number(row.sessions),
            format_duration(row.avg_response_time),
            format_duration(row.avg_duration)
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "TOP PAGES").unwrap();
    writeln!(out, "─────────").unwrap();
    let max_messages = doc.top_pages.iter().map(|p| p.messages).max().unwrap_or(0);
    for page in doc.top_pages.iter().take(TOP_PAGES_SHOWN) {
        writeln!(
            out,
            "{:<24} {:>8}  {}",
            page.name,
            format_number(page.messages),
            bar(page.messages, max_messages)
        )
        .unwrap();
    }
    if doc.top_pages.is_empty() {
        writeln!(out, "(no page data)").unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "DAILY TREND").unwrap();
    writeln!(out, "───────────").unwrap();
    let max_daily = doc.daily_trend.iter().map(|d| d.messages).max().unwrap_or(0);
    for day in &doc.daily_trend {
        writeln!(
            out,
            "{}  {:>7}  {}",
            day.date,
            format_number(day.messages),
            bar(day.messages, max_daily)
        )
        .unwrap();
    }
    if doc.daily_trend.is_empty() {
        writeln!(out, "(no trend data)").unwrap();
    }

    out
}

/// Formats the filtered overview, recomputed from the daily series.
pub fn format_filtered(doc: &AnalyticsDoc, start: Option<&str>, end: Option<&str>) -> String {
    let mut out = String::new();

    writeln!(out, "PAGE ANALYTICS DASHBOARD").unwrap();
    writeln!(out, "========================").unwrap();
    writeln!(out, "Range: {}", range_label(start, end)).unwrap();

    let days = filter_by_range(&doc.daily_stats, start, end);
    let summary = aggregate(&days);

    writeln!(out).unwrap();
    writeln!(out, "TOTALS ({} days)", days.len()).unwrap();
    writeln!(out, "──────").unwrap();
    writeln!(out, "Messages:       {}", format_number(summary.messages)).unwrap();
    writeln!(out, "  Incoming:     {}", format_number(summary.incoming)).unwrap();
    writeln!(out, "  Outgoing:     {}", format_number(summary.outgoing)).unwrap();
    writeln!(out, "Sessions:       {}", format_number(summary.sessions)).unwrap();
    writeln!(out, "Comments:       {}", format_number(summary.comments)).unwrap();
    writeln!(out, "  Hidden:       {}", format_number(summary.hidden)).unwrap();
    writeln!(out, "  Replies:      {}", format_number(summary.replies)).unwrap();
    #[allow(clippy::cast_precision_loss)]
    let avg_response = summary.avg_response_time.map(|secs| secs as f64);
    writeln!(out, "Avg response:   {}", format_duration(avg_response)).unwrap();

    // Session durations only exist in the whole-range precomputed block.
    writeln!(out, "Avg session:    N/A").unwrap();

    writeln!(out).unwrap();
    writeln!(out, "SHIFT MESSAGES").unwrap();
    writeln!(out, "──────────────").unwrap();
    let rollup = rollup_by_shift(&doc.daily_shift_stats, start, end);
    for shift in Shift::ALL {
        let counters = rollup.get(shift);
        writeln!(
            out,
            "{:<8} messages {:>8}  in {:>8}  out {:>8}",
            shift,
            format_number(counters.messages),
            format_number(counters.incoming),
            format_number(counters.outgoing)
        )
        .unwrap();
    }

    out
}

/// Runs the dashboard command.
pub fn run(doc: &AnalyticsDoc, range: &RangeArgs) -> Result<()> {
    let output = if range.is_active() {
        let (start, end) = resolve_range(range, doc);
        format_filtered(doc, start.as_deref(), end.as_deref())
    } else {
        format_overview(doc)
    };
    print!("{output}");
    Ok(())
}
