//! Inclusive date-range filtering over daily records.

use crate::model::DailyStat;

/// Returns `true` when `date` falls inside the inclusive `[start, end]`
/// range. An absent or empty bound places no restriction on that side.
///
/// ISO `YYYY-MM-DD` strings sort lexicographically in chronological order,
/// so plain string comparison is exact and avoids timezone parsing.
pub(crate) fn in_range(date: &str, start: Option<&str>, end: Option<&str>) -> bool {
    let after_start = non_empty(start).is_none_or(|s| date >= s);
    let before_end = non_empty(end).is_none_or(|e| date <= e);
    after_start && before_end
}

fn non_empty(bound: Option<&str>) -> Option<&str> {
    bound.filter(|b| !b.is_empty())
}

/// Selects the daily records whose date falls within `[start, end]`,
/// preserving input order.
///
/// When either bound is absent or empty the filter short-circuits and the
/// full series is returned unchanged. `start > end` yields an empty result,
/// not an error.
#[must_use]
pub fn filter_by_range(
    series: &[DailyStat],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<DailyStat> {
    let (Some(start), Some(end)) = (non_empty(start), non_empty(end)) else {
        return series.to_vec();
    };

    series
        .iter()
        .filter(|d| d.date.as_str() >= start && d.date.as_str() <= end)
        .cloned()
        .collect()
}
