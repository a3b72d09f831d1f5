//! Shared helpers for the range-aware views.

use chrono::{Local, NaiveDate};
use pagepulse_core::Preset;
use pagepulse_data::AnalyticsDoc;

use crate::cli::RangeArgs;

/// Resolves the range flags into concrete inclusive bounds.
///
/// A preset overrides `--from`/`--to`. Presets anchor at the export's
/// `maxDate` so "Today" means the most recent day with data, not the
/// operator's wall clock; the local date is only a fallback for exports
/// with no date range. Empty bounds come back as `None`, which the
/// filtering layer treats as open.
///
/// A single flag is completed from the data bounds: the daily filter
/// treats a half-open pair as no filter at all, while the rollups restrict
/// on the given side, and one view must never mix the two readings.
pub fn resolve_range(range: &RangeArgs, doc: &AnalyticsDoc) -> (Option<String>, Option<String>) {
    if let Some(preset) = range.preset {
        let anchor = doc
            .date_range
            .as_ref()
            .and_then(|r| NaiveDate::parse_from_str(&r.max_date, "%Y-%m-%d").ok())
            .unwrap_or_else(|| Local::now().date_naive());
        let (start, end) = Preset::from(preset).resolve(anchor, doc.date_range.as_ref());
        return (non_empty(start), non_empty(end));
    }

    let mut start = range.from.clone().and_then(non_empty);
    let mut end = range.to.clone().and_then(non_empty);
    if start.is_some() != end.is_some() {
        let (min, max) = data_bounds(doc);
        if start.is_none() {
            start = min;
        } else {
            end = max;
        }
    }
    (start, end)
}

/// First and last day with data, from the export's declared range or, for
/// exports without one, the daily series itself.
fn data_bounds(doc: &AnalyticsDoc) -> (Option<String>, Option<String>) {
    if let Some(range) = &doc.date_range {
        return (
            non_empty(range.min_date.clone()),
            non_empty(range.max_date.clone()),
        );
    }
    let dates = || doc.daily_stats.iter().map(|d| d.date.as_str());
    (
        dates().min().map(str::to_string),
        dates().max().map(str::to_string),
    )
}

/// Describes a resolved range for report headers.
#[must_use]
pub fn range_label(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if start == end => start.to_string(),
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(start), None) => format!("from {start}"),
        (None, Some(end)) => format!("through {end}"),
        (None, None) => "all time".to_string(),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PresetArg;
    use pagepulse_core::DateRange;

    fn doc_with_range(min: &str, max: &str) -> AnalyticsDoc {
        AnalyticsDoc {
            date_range: Some(DateRange {
                min_date: min.to_string(),
                max_date: max.to_string(),
            }),
            ..AnalyticsDoc::default()
        }
    }

    #[test]
    fn explicit_bounds_pass_through() {
        let range = RangeArgs {
            from: Some("2024-03-01".to_string()),
            to: Some("2024-03-10".to_string()),
            preset: None,
        };
        let (start, end) = resolve_range(&range, &AnalyticsDoc::default());
        assert_eq!(start.as_deref(), Some("2024-03-01"));
        assert_eq!(end.as_deref(), Some("2024-03-10"));
    }

    #[test]
    fn empty_bounds_become_open() {
        let range = RangeArgs {
            from: Some(String::new()),
            to: None,
            preset: None,
        };
        let (start, end) = resolve_range(&range, &AnalyticsDoc::default());
        assert!(start.is_none());
        assert!(end.is_none());
    }

    #[test]
    fn single_flag_is_completed_from_the_date_range() {
        let doc = doc_with_range("2023-11-01", "2024-03-10");

        let from_only = RangeArgs {
            from: Some("2024-03-05".to_string()),
            to: None,
            preset: None,
        };
        let (start, end) = resolve_range(&from_only, &doc);
        assert_eq!(start.as_deref(), Some("2024-03-05"));
        assert_eq!(end.as_deref(), Some("2024-03-10"));

        let to_only = RangeArgs {
            from: None,
            to: Some("2024-03-05".to_string()),
            preset: None,
        };
        let (start, end) = resolve_range(&to_only, &doc);
        assert_eq!(start.as_deref(), Some("2023-11-01"));
        assert_eq!(end.as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn single_flag_falls_back_to_the_daily_series_bounds() {
        let mut doc = AnalyticsDoc::default();
        for date in ["2024-01-03", "2024-01-01", "2024-01-02"] {
            doc.daily_stats.push(pagepulse_core::DailyStat {
                date: date.to_string(),
                ..pagepulse_core::DailyStat::default()
            });
        }

        let range = RangeArgs {
            from: Some("2024-01-02".to_string()),
            to: None,
            preset: None,
        };
        let (start, end) = resolve_range(&range, &doc);
        assert_eq!(start.as_deref(), Some("2024-01-02"));
        assert_eq!(end.as_deref(), Some("2024-01-03"));
    }

    #[test]
    fn preset_overrides_explicit_bounds() {
        let range = RangeArgs {
            from: Some("1999-01-01".to_string()),
            to: Some("1999-01-02".to_string()),
            preset: Some(PresetArg::Last7),
        };
        let doc = doc_with_range("2023-11-01", "2024-03-10");
        let (start, end) = resolve_range(&range, &doc);
        assert_eq!(start.as_deref(), Some("2024-03-03"));
        assert_eq!(end.as_deref(), Some("2024-03-10"));
    }

    #[test]
    fn presets_anchor_at_the_data_max_date() {
        let range = RangeArgs {
            from: None,
            to: None,
            preset: Some(PresetArg::Today),
        };
        let doc = doc_with_range("2023-11-01", "2024-03-10");
        let (start, end) = resolve_range(&range, &doc);
        assert_eq!(start.as_deref(), Some("2024-03-10"));
        assert_eq!(end.as_deref(), Some("2024-03-10"));
    }

    #[test]
    fn all_time_without_bounds_stays_open() {
        let range = RangeArgs {
            from: None,
            to: None,
            preset: Some(PresetArg::All),
        };
        let (start, end) = resolve_range(&range, &AnalyticsDoc::default());
        assert!(start.is_none());
        assert!(end.is_none());
    }

    #[test]
    fn labels_cover_every_bound_shape() {
        assert_eq!(
            range_label(Some("2024-03-03"), Some("2024-03-10")),
            "2024-03-03 to 2024-03-10"
        );
        assert_eq!(range_label(Some("2024-03-10"), Some("2024-03-10")), "2024-03-10");
        assert_eq!(range_label(Some("2024-03-03"), None), "from 2024-03-03");
        assert_eq!(range_label(None, Some("2024-03-10")), "through 2024-03-10");
        assert_eq!(range_label(None, None), "all time");
    }
}
