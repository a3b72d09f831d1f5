//! Report command: the management report grouping shift performance by
//! page, with an optional category filter.

use std::fmt::Write;

use anyhow::Result;
use pagepulse_core::Shift;
use pagepulse_data::{AnalyticsDoc, PageGroup, grand_totals, group_pages, shift_summary};

use crate::render::{format_duration, format_number};

/// Computed report data: the grouped pages surviving the category filter.
#[derive(Debug)]
pub struct ReportData {
    pub pages: Vec<PageGroup>,
    pub total_pages: usize,
    pub category: Option<String>,
}

/// Groups the export's flat page × shift rows and applies the category
/// filter. Category names match exactly; filtering happens after grouping
/// so `total_pages` still reflects the whole export.
pub fn build_report(doc: &AnalyticsDoc, category: Option<&str>) -> ReportData {
    let mut pages = group_pages(&doc.page_shift_performance);
    let total_pages = pages.len();
    if let Some(category) = category {
        pages.retain(|p| p.category == category);
    }
    ReportData {
        pages,
        total_pages,
        category: category.map(str::to_string),
    }
}

/// Formats the management report.
pub fn format_report(data: &ReportData, doc: &AnalyticsDoc) -> String {
    let mut out = String::new();

    writeln!(out, "MANAGEMENT REPORT").unwrap();
    writeln!(out, "=================").unwrap();
    match &data.category {
        Some(category) => writeln!(
            out,
            "Category: {category}  ({} of {} pages)",
            data.pages.len(),
            data.total_pages
        )
        .unwrap(),
        None => writeln!(out, "Pages: {}", data.total_pages).unwrap(),
    }

    if !doc.category_stats.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "CATEGORIES").unwrap();
        writeln!(out, "──────────").unwrap();
        for stat in &doc.category_stats {
            writeln!(
                out,
                "{:<16} {:>3} pages  {:>9} messages  {:>8} sessions",
                stat.category,
                stat.page_count,
                format_number(stat.messages),
                format_number(stat.sessions)
            )
            .unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "PAGES BY SHIFT").unwrap();
    writeln!(out, "──────────────").unwrap();
    if data.pages.is_empty() {
        writeln!(out, "(no matching pages)").unwrap();
    }
    for page in &data.pages {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{}  [{}]  {} messages, {} sessions",
            page.name,
            page.category,
            format_number(page.totals.messages),
            format_number(page.totals.sessions)
        )
        .unwrap();
        for shift in Shift::ALL {
            match page.shift_row(shift) {
                Some(row) => writeln!(
                    out,
                    "  {:<8} ({})  msgs {:>7}  in {:>7}  out {:>7}  response {:>7}",
                    shift,
                    shift.window(),
                    format_number(row.messages),
                    format_number(row.incoming),
                    format_number(row.outgoing),
                    format_duration(row.avg_response_time)
                )
                .unwrap(),
                None => writeln!(out, "  {:<8} ({})  no activity", shift, shift.window()).unwrap(),
            }
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "TOTALS").unwrap();
    writeln!(out, "──────").unwrap();
    let totals = grand_totals(&data.pages);
    writeln!(
        out,
        "All shifts   msgs {:>9}  in {:>9}  out {:>9}  sessions {:>8}",
        format_number(totals.messages),
        format_number(totals.incoming),
        format_number(totals.outgoing),
        format_number(totals.sessions)
    )
    .unwrap();
    for shift in Shift::ALL {
        let (messages, sessions) = shift_summary(&data.pages, shift);
        writeln!(
            out,
            "{:<12} msgs {:>9}  sessions {:>8}",
            shift.as_str(),
            format_number(messages),
            format_number(sessions)
        )
        .unwrap();
    }

    out
}

/// Runs the report command.
pub fn run(doc: &AnalyticsDoc, category: Option<&str>) -> Result<()> {
    let data = build_report(doc, category);
    print!("{}", format_report(&data, doc));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepulse_data::{CategoryStat, PageShiftRow};

    fn row(name: &str, category: &str, shift: &str, messages: u64, sessions: u64) -> PageShiftRow {
        PageShiftRow {
            page_id: format!("id-{name}"),
            name: name.to_string(),
            category: category.to_string(),
            shift: shift.to_string(),
            messages,
            incoming: messages / 2,
            outgoing: messages - messages / 2,
            sessions,
            avg_response_time: Some(120.0),
        }
    }

    fn sample_doc() -> AnalyticsDoc {
        AnalyticsDoc {
            page_shift_performance: vec![
                row("Alpha", "Hosts", "Morning", 100, 10),
                row("Alpha", "Hosts", "Mid", 200, 20),
                row("Beta", "Babes", "Evening", 500, 50),
            ],
            category_stats: vec![CategoryStat {
                category: "Hosts".to_string(),
                page_count: 14,
                messages: 300,
                sessions: 30,
            }],
            ..AnalyticsDoc::default()
        }
    }

    #[test]
    fn report_groups_pages_and_sums_totals() {
        let data = build_report(&sample_doc(), None);
        let output = format_report(&data, &sample_doc());
        assert!(output.contains("Pages: 2"));
        assert!(output.contains("Alpha  [Hosts]  300 messages, 30 sessions"));
        assert!(output.contains("Beta  [Babes]  500 messages, 50 sessions"));
    }

    #[test]
    fn category_filter_matches_exactly() {
        let data = build_report(&sample_doc(), Some("Hosts"));
        assert_eq!(data.pages.len(), 1);
        assert_eq!(data.pages[0].name, "Alpha");
        assert_eq!(data.total_pages, 2);

        let none = build_report(&sample_doc(), Some("hosts"));
        assert!(none.pages.is_empty());
    }

    #[test]
    fn filtered_totals_cover_only_matching_pages() {
        let data = build_report(&sample_doc(), Some("Hosts"));
        let output = format_report(&data, &sample_doc());
        assert!(output.contains("Category: Hosts  (1 of 2 pages)"));
        let totals_line = output
            .lines()
            .find(|l| l.starts_with("All shifts"))
            .unwrap();
        assert!(totals_line.contains("300"));
        assert!(!totals_line.contains("800"));
    }

    #[test]
    fn missing_shifts_render_as_no_activity() {
        let data = build_report(&sample_doc(), Some("Babes"));
        let output = format_report(&data, &sample_doc());
        assert!(output.contains("Morning  (6:00 AM - 2:00 PM)  no activity"));
        assert!(output.contains("Evening  (10:00 PM - 6:00 AM)  msgs"));
    }

    #[test]
    fn category_block_uses_the_producer_page_count() {
        let data = build_report(&sample_doc(), None);
        let output = format_report(&data, &sample_doc());
        assert!(output.contains("Hosts             14 pages"));
    }
}
