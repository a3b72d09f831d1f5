//! Quick date-filter presets from the range picker.

use chrono::{Duration, NaiveDate};

use crate::model::DateRange;

/// The quick filters offered next to the explicit from/to inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Today,
    Last7Days,
    Last30Days,
    AllTime,
}

impl Preset {
    /// Resolves the preset to an inclusive `(start, end)` day pair.
    ///
    /// `Today` and the last-N windows anchor at `reference`. A last-N window
    /// subtracts N days from the anchor and keeps both endpoints, so it
    /// spans N+1 calendar days inclusive: `Last7Days` anchored at
    /// `2024-03-10` selects `2024-03-03` through `2024-03-10`.
    ///
    /// `AllTime` resolves to the supplied data bounds; with no bounds it
    /// yields empty strings, which downstream filtering treats as an open
    /// range.
    #[must_use]
    pub fn resolve(self, reference: NaiveDate, range: Option<&DateRange>) -> (String, String) {
        match self {
            Self::Today => (iso_day(reference), iso_day(reference)),
            Self::Last7Days => last_days(reference, 7),
            Self::Last30Days => last_days(reference, 30),
            Self::AllTime => range.map_or_else(
                || (String::new(), String::new()),
                |r| (r.min_date.clone(), r.max_date.clone()),
            ),
        }
    }
}

fn last_days(reference: NaiveDate, days: i64) -> (String, String) {
    let start = reference - Duration::days(days);
    (iso_day(start), iso_day(reference))
}

fn iso_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
