//! Messages command: volume metrics and the hourly distribution.

use std::fmt::Write;

use anyhow::Result;
use pagepulse_data::AnalyticsDoc;

use crate::render::{bar, format_duration, format_number};

/// Formats the message analytics view.
pub fn format_messages(doc: &AnalyticsDoc) -> String {
    let mut out = String::new();

    writeln!(out, "MESSAGE ANALYTICS").unwrap();
    writeln!(out, "=================").unwrap();

    let totals = doc.totals.clone().unwrap_or_default();
    let stats = doc.message_stats.clone().unwrap_or_default();

    writeln!(out).unwrap();
    writeln!(out, "VOLUME").unwrap();
    writeln!(out, "──────").unwrap();
    writeln!(out, "Total:     {}", format_number(totals.messages)).unwrap();
    writeln!(out, "Incoming:  {}", format_number(stats.incoming)).unwrap();
    writeln!(out, "Outgoing:  {}", format_number(stats.outgoing)).unwrap();
    writeln!(
        out,
        "Avg response: {}",
        format_duration(totals.avg_response_time)
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(out, "BY TIMEFRAME").unwrap();
    writeln!(out, "────────────").unwrap();
    if doc.messages_by_timeframe.is_empty() {
        writeln!(out, "(no timeframe data)").unwrap();
    } else {
        writeln!(
            out,
            "{:<10} {:>8} {:>10} {:>8} {:>10}",
            "Shift", "Total", "Received", "Sent", "Response"
        )
        .unwrap();
        let mut total = 0;
        let mut received = 0;
        let mut sent = 0;
        for row in &doc.messages_by_timeframe {
            total += row.total;
            received += row.received;
            sent += row.sent;
            writeln!(
                out,
                "{:<10} {:>8} {:>10} {:>8} {:>10}",
                row.shift,
                format_number(row.total),
                format_number(row.received),
                format_number(row.sent),
                format_duration(row.avg_response)
            )
            .unwrap();
        }
        writeln!(
            out,
            "{:<10} {:>8} {:>10} {:>8} {:>10}",
            "Total",
            format_number(total),
            format_number(received),
            format_number(sent),
            format_duration(totals.avg_response_time)
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "HOURLY DISTRIBUTION").unwrap();
    writeln!(out, "───────────────────").unwrap();
    if doc.hourly_distribution.is_empty() {
        writeln!(out, "(no hourly data)").unwrap();
    }
    let max_hourly = doc
        .hourly_distribution
        .iter()
        .map(|h| h.messages)
        .max()
        .unwrap_or(0);
    for point in &doc.hourly_distribution {
        writeln!(
            out,
            "{:>2}:00  {:>7}  {}",
            point.hour,
            format_number(point.messages),
            bar(point.messages, max_hourly)
        )
        .unwrap();
    }

    out
}

/// Runs the messages command.
pub fn run(doc: &AnalyticsDoc) -> Result<()> {
    print!("{}", format_messages(doc));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepulse_data::{HourlyPoint, MessageStats, TimeframeRow, Totals};

    fn sample_doc() -> AnalyticsDoc {
        AnalyticsDoc {
            totals: Some(Totals {
                messages: 1_500,
                avg_response_time: Some(300.0),
                ..Totals::default()
            }),
            message_stats: Some(MessageStats {
                incoming: 900,
                outgoing: 600,
            }),
            messages_by_timeframe: vec![
                TimeframeRow {
                    shift: "Morning".to_string(),
                    total: 700,
                    received: 400,
                    sent: 300,
                    avg_response: Some(120.0),
                },
                TimeframeRow {
                    shift: "Mid".to_string(),
                    total: 800,
                    received: 500,
                    sent: 300,
                    avg_response: None,
                },
            ],
            hourly_distribution: vec![
                HourlyPoint {
                    hour: 9,
                    messages: 120,
                },
                HourlyPoint {
                    hour: 14,
                    messages: 240,
                },
            ],
            ..AnalyticsDoc::default()
        }
    }

    #[test]
    fn volume_block_uses_totals_and_split() {
        let output = format_messages(&sample_doc());
        assert!(output.contains("Total:     1,500"));
        assert!(output.contains("Incoming:  900"));
        assert!(output.contains("Outgoing:  600"));
        assert!(output.contains("Avg response: 5m"));
    }

    #[test]
    fn timeframe_table_sums_a_totals_row() {
        let output = format_messages(&sample_doc());
        let totals_row = output
            .lines()
            .find(|l| l.starts_with("Total ") && l.contains("1,500"))
            .expect("totals row");
        assert!(totals_row.contains("900"));
        assert!(totals_row.contains("600"));
    }

    #[test]
    fn hourly_rows_scale_against_the_peak_hour() {
        let output = format_messages(&sample_doc());
        let peak = output.lines().find(|l| l.starts_with("14:00")).unwrap();
        assert!(peak.contains(&"█".repeat(20)));
        let off_peak = output.lines().find(|l| l.starts_with(" 9:00")).unwrap();
        assert!(off_peak.contains(&format!("{}{}", "█".repeat(10), "░".repeat(10))));
    }

    #[test]
    fn empty_export_renders_placeholders() {
        let output = format_messages(&AnalyticsDoc::default());
        assert!(output.contains("(no timeframe data)"));
        assert!(output.contains("(no hourly data)"));
    }
}
