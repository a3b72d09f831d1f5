//! Pages command: the sortable per-page performance table.

use std::fmt::Write;

use anyhow::Result;
use pagepulse_data::{AnalyticsDoc, PageStat};

use crate::cli::SortField;
use crate::render::{format_duration, format_number};

/// Returns the rows sorted by the chosen column, descending by default.
///
/// Response and duration sorts treat a missing value as zero, so pages
/// without measurements sink to the bottom of a descending sort.
pub fn sorted_pages(doc: &AnalyticsDoc, sort: SortField, ascending: bool) -> Vec<&PageStat> {
    #[allow(clippy::cast_precision_loss)]
    let key = |page: &PageStat| -> f64 {
        match sort {
            SortField::Messages => page.messages as f64,
            SortField::Sessions => page.sessions as f64,
            SortField::Response => page.avg_response_time.unwrap_or(0.0),
            SortField::Duration => page.avg_duration.unwrap_or(0.0),
        }
    };

    let mut pages: Vec<&PageStat> = doc.page_stats.iter().collect();
    pages.sort_by(|a, b| {
        let ord = key(a).total_cmp(&key(b));
        if ascending { ord } else { ord.reverse() }
    });
    pages
}

/// Formats the page performance table.
pub fn format_pages(doc: &AnalyticsDoc, sort: SortField, ascending: bool) -> String {
    let mut out = String::new();

    writeln!(out, "PAGE PERFORMANCE").unwrap();
    writeln!(out, "================").unwrap();

    if !doc.category_stats.is_empty() {
        writeln!(out).unwrap();
        for stat in &doc.category_stats {
            writeln!(
                out,
                "{:<16} {:>3} pages  {:>9} messages",
                stat.category,
                stat.page_count,
                format_number(stat.messages)
            )
            .unwrap();
        }
    }

    let pages = sorted_pages(doc, sort, ascending);
    if pages.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "(no page data)").unwrap();
        return out;
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "{:<24} {:>9} {:>9} {:>9} {:>9}",
        "Page", "Messages", "Sessions", "Response", "Duration"
    )
    .unwrap();
    for page in pages {
        writeln!(
            out,
            "{:<24} {:>9} {:>9} {:>9} {:>9}",
            page.name,
            format_number(page.messages),
            format_number(page.sessions),
            format_duration(page.avg_response_time),
            format_duration(page.avg_duration)
        )
        .unwrap();
    }

    out
}

/// Runs the pages command.
pub fn run(doc: &AnalyticsDoc, sort: SortField, ascending: bool) -> Result<()> {
    print!("{}", format_pages(doc, sort, ascending));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str, messages: u64, sessions: u64, response: Option<f64>) -> PageStat {
        PageStat {
            page_id: format!("id-{name}"),
            name: name.to_string(),
            messages,
            sessions,
            avg_response_time: response,
            avg_duration: None,
        }
    }

    fn sample_doc() -> AnalyticsDoc {
        AnalyticsDoc {
            page_stats: vec![
                page("Alpha", 100, 20, Some(300.0)),
                page("Beta", 400, 10, None),
                page("Gamma", 250, 30, Some(60.0)),
            ],
            ..AnalyticsDoc::default()
        }
    }

    #[test]
    fn default_sort_is_messages_descending() {
        let doc = sample_doc();
        let names: Vec<_> = sorted_pages(&doc, SortField::Messages, false)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Beta", "Gamma", "Alpha"]);
    }

    #[test]
    fn ascending_reverses_the_order() {
        let doc = sample_doc();
        let names: Vec<_> = sorted_pages(&doc, SortField::Sessions, true)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn missing_response_times_sort_as_zero() {
        let doc = sample_doc();
        let names: Vec<_> = sorted_pages(&doc, SortField::Response, false)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Alpha", "Gamma", "Beta"]);
    }

    #[test]
    fn table_renders_formatted_cells() {
        let output = format_pages(&sample_doc(), SortField::Messages, false);
        assert!(output.contains("Beta"));
        assert!(output.contains("400"));
        assert!(output.contains("5m"));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn category_counts_come_from_the_producer() {
        let mut doc = sample_doc();
        doc.category_stats.push(pagepulse_data::CategoryStat {
            category: "Hosts".to_string(),
            page_count: 14,
            messages: 750,
            sessions: 60,
        });
        let output = format_pages(&doc, SortField::Messages, false);
        assert!(output.contains("Hosts             14 pages"));
    }

    #[test]
    fn empty_export_renders_a_placeholder() {
        let output = format_pages(&AnalyticsDoc::default(), SortField::Messages, false);
        assert!(output.contains("(no page data)"));
    }
}
