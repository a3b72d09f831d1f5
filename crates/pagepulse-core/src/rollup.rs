//! Shift and category rollups over a bounded date range.

use std::collections::BTreeMap;

use crate::filter::in_range;
use crate::model::ShiftCounters;
use crate::shift::Shift;

/// Per-bucket counters keyed by date, as emitted by the export job for
/// `dailyShiftStats` (date → shift label → counters) and its
/// `dailyCategoryStats` sibling (date → category → counters).
///
/// `BTreeMap` keeps iteration in date (and label) order, which makes the
/// rollups deterministic without an explicit sort.
pub type DailyGroupStats = BTreeMap<String, BTreeMap<String, ShiftCounters>>;

/// Rollup result with a fixed slot per [`Shift`].
///
/// All three buckets exist regardless of input sparsity, so consumers always
/// see a stable three-row result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRollup {
    buckets: [ShiftCounters; 3],
}

impl ShiftRollup {
    /// Counters accumulated for the given shift.
    #[must_use]
    pub const fn get(&self, shift: Shift) -> &ShiftCounters {
        &self.buckets[shift.index()]
    }

    fn get_mut(&mut self, shift: Shift) -> &mut ShiftCounters {
        &mut self.buckets[shift.index()]
    }

    /// Iterates the three buckets in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = (Shift, &ShiftCounters)> {
        Shift::ALL.iter().map(|&shift| (shift, self.get(shift)))
    }

    /// Sum of message counters across all three shifts.
    #[must_use]
    pub fn total_messages(&self) -> u64 {
        self.buckets.iter().map(|b| b.messages).sum()
    }
}

/// Regroups a date → shift map into per-shift totals for `[start, end]`.
///
/// Bounds use the same inclusive lexicographic comparison as
/// [`filter_by_range`](crate::filter_by_range); an absent or empty bound is
/// open on that side. Labels outside the three known shifts are skipped
/// rather than raising an error, guarding against unexpected producer
/// output.
#[must_use]
pub fn rollup_by_shift(
    daily: &DailyGroupStats,
    start: Option<&str>,
    end: Option<&str>,
) -> ShiftRollup {
    let mut rollup = ShiftRollup::default();

    for (date, shifts) in daily {
        if !in_range(date, start, end) {
            continue;
        }
        for (label, counters) in shifts {
            match label.parse::<Shift>() {
                Ok(shift) => rollup.get_mut(shift).accumulate(counters),
                Err(_) => tracing::debug!(%label, %date, "skipping unknown shift label"),
            }
        }
    }

    rollup
}

/// Regroups a date → category map into per-category totals for
/// `[start, end]`.
///
/// The same accumulation as [`rollup_by_shift`], keyed by category name.
/// Category keys are open-ended, so the result carries only categories seen
/// in range. The per-category `pageCount` is deliberately *not* derived
/// here: the rollup only sees already-summed counters, never raw page
/// membership, so callers take it from the producer's `categoryStats`.
#[must_use]
pub fn rollup_by_category(
    daily: &DailyGroupStats,
    start: Option<&str>,
    end: Option<&str>,
) -> BTreeMap<String, ShiftCounters> {
    let mut rollup: BTreeMap<String, ShiftCounters> = BTreeMap::new();

    for (date, categories) in daily {
        if !in_range(date, start, end) {
            continue;
        }
        for (category, counters) in categories {
            rollup
                .entry(category.clone())
                .or_default()
                .accumulate(counters);
        }
    }

    rollup
}
