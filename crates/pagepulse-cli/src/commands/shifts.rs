//! Shifts command: per-shift performance across messages, comments,
//! sessions, and categories.

use std::fmt::Write;

use anyhow::Result;
use pagepulse_core::{Shift, rollup_by_category, rollup_by_shift};
use pagepulse_data::AnalyticsDoc;

use crate::cli::RangeArgs;
use crate::commands::util::{range_label, resolve_range};
use crate::render::{format_duration, format_number};

/// Formats the shift analysis view.
///
/// With a date filter, message counters regroup from the daily per-shift
/// series; the comment, session, and category tables always cover the whole
/// range because the export carries no daily breakdown for them.
pub fn format_shifts(doc: &AnalyticsDoc, start: Option<&str>, end: Option<&str>) -> String {
    let filtered = start.is_some() || end.is_some();
    let mut out = String::new();

    writeln!(out, "SHIFT ANALYSIS").unwrap();
    writeln!(out, "==============").unwrap();
    if filtered {
        writeln!(out, "Range: {}", range_label(start, end)).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "SCHEDULE").unwrap();
    writeln!(out, "────────").unwrap();
    for shift in Shift::ALL {
        writeln!(out, "{:<8} {}", shift, shift.window()).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "MESSAGES").unwrap();
    writeln!(out, "────────").unwrap();
    if filtered {
        let rollup = rollup_by_shift(&doc.daily_shift_stats, start, end);
        for shift in Shift::ALL {
            let counters = rollup.get(shift);
            writeln!(
                out,
                "{:<8} total {:>8}  in {:>8}  out {:>8}",
                shift,
                format_number(counters.messages),
                format_number(counters.incoming),
                format_number(counters.outgoing)
            )
            .unwrap();
        }
    } else if doc.shift_messages.is_empty() {
        writeln!(out, "(no message data)").unwrap();
    } else {
        for row in &doc.shift_messages {
            writeln!(
                out,
                "{:<8} total {:>8}  in {:>8}  out {:>8}",
                row.shift,
                format_number(row.messages),
                format_number(row.incoming),
                format_number(row.outgoing)
            )
            .unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "COMMENTS").unwrap();
    writeln!(out, "────────").unwrap();
    if doc.shift_comments.is_empty() {
        writeln!(out, "(no comment data)").unwrap();
    }
    for row in &doc.shift_comments {
        writeln!(
            out,
            "{:<8} total {:>8}  hidden {:>7}  replies {:>7}",
            row.shift,
            format_number(row.total),
            format_number(row.hidden),
            format_number(row.replies)
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "SESSIONS").unwrap();
    writeln!(out, "────────").unwrap();
    if doc.shift_stats.is_empty() {
        writeln!(out, "(no session data)").unwrap();
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
    writeln!(out, "BY CATEGORY").unwrap();
    writeln!(out, "───────────").unwrap();
    if filtered {
        // The per-shift category matrix only exists precomputed for the
        // whole range; a filtered view regroups the daily category series.
        let rollup = rollup_by_category(&doc.daily_category_stats, start, end);
        if rollup.is_empty() {
            writeln!(out, "(no category data)").unwrap();
        }
        for (category, counters) in &rollup {
            writeln!(
                out,
                "{:<16} total {:>8}  in {:>8}  out {:>8}",
                category,
                format_number(counters.messages),
                format_number(counters.incoming),
                format_number(counters.outgoing)
            )
            .unwrap();
        }
    } else if doc.category_shift_stats.is_empty() {
        writeln!(out, "(no category data)").unwrap();
    } else {
        writeln!(
            out,
            "{:<16} {:>9} {:>9} {:>9}",
            "Category", "Morning", "Mid", "Evening"
        )
        .unwrap();
        for row in &doc.category_shift_stats {
            writeln!(
                out,
                "{:<16} {:>9} {:>9} {:>9}",
                row.category,
                format_number(row.morning),
                format_number(row.mid),
                format_number(row.evening)
            )
            .unwrap();
        }
    }

    out
}

/// Runs the shifts command.
pub fn run(doc: &AnalyticsDoc, range: &RangeArgs) -> Result<()> {
    let (start, end) = if range.is_active() {
        resolve_range(range, doc)
    } else {
        (None, None)
    };
    print!("{}", format_shifts(doc, start.as_deref(), end.as_deref()));
    Ok(())
}
