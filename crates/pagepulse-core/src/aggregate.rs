//! Reduction of daily records into a single summary.

use crate::model::{AggregateSummary, DailyStat};

/// Rounds a weighted sum down to a whole-second mean, or `None` when no
/// weight was accumulated. Zero is deliberately not used as the empty value:
/// it would falsely read as a measured instantaneous response.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn weighted_mean_secs(sum: f64, count: u64) -> Option<u64> {
    (count > 0).then(|| (sum / count as f64).round() as u64)
}

/// Reduces a sequence of daily records into one [`AggregateSummary`].
///
/// Counters are plain sums. The response time is a session-weighted mean:
/// each day contributes `avg_response_time * sessions`, weighted by its
/// session count, and days without a measured response time contribute
/// nothing to either side (rather than biasing the mean toward zero). A
/// zero response time counts as unmeasured, the same way zero durations
/// render as `N/A` downstream.
///
/// An empty input yields all-zero counters with `avg_response_time: None`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(series: &[DailyStat]) -> AggregateSummary {
    let mut acc = AggregateSummary::default();

    for day in series {
        acc.messages += day.messages;
        acc.incoming += day.incoming;
        acc.outgoing += day.outgoing;
        acc.comments += day.comments;
        acc.hidden += day.hidden;
        acc.replies += day.replies;
        acc.with_replies += day.with_replies;
        acc.sessions += day.sessions;

        if let Some(response_time) = day.avg_response_time.filter(|rt| *rt > 0.0) {
            acc.response_time_sum += response_time * day.sessions as f64;
            acc.response_time_count += day.sessions;
        }
    }

    acc.avg_response_time = weighted_mean_secs(acc.response_time_sum, acc.response_time_count);
    acc
}

impl AggregateSummary {
    /// Combines two summaries over disjoint day-sets.
    ///
    /// Counters add field-by-field; the response time is recombined through
    /// the carried weighted sum and weight, not by averaging the two
    /// sub-averages. Aggregating a concatenation of two series is therefore
    /// equivalent to merging their individual aggregates.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = Self {
            messages: self.messages + other.messages,
            incoming: self.incoming + other.incoming,
            outgoing: self.outgoing + other.outgoing,
            comments: self.comments + other.comments,
            hidden: self.hidden + other.hidden,
            replies: self.replies + other.replies,
            with_replies: self.with_replies + other.with_replies,
            sessions: self.sessions + other.sessions,
            response_time_sum: self.response_time_sum + other.response_time_sum,
            response_time_count: self.response_time_count + other.response_time_count,
            avg_response_time: None,
        };
        merged.avg_response_time =
            weighted_mean_secs(merged.response_time_sum, merged.response_time_count);
        merged
    }
}
