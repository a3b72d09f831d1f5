//! Shared text rendering helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// Formats an integer with thousands separators (`12,345`).
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a duration in seconds: `42s` under a minute, `7m` under an hour,
/// `1.3h` beyond. Absent or zero durations render as `N/A` — zero would
/// falsely read as a measured instantaneous value.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        None => "N/A".to_string(),
        Some(secs) if secs == 0.0 => "N/A".to_string(),
        Some(secs) if secs < 60.0 => format!("{}s", secs.round() as u64),
        Some(secs) if secs < 3600.0 => format!("{}m", (secs / 60.0).round() as u64),
        Some(secs) => format!("{:.1}h", secs / 3600.0),
    }
}

/// Formats a timestamp relative to `now`: `12m ago`, `3h ago`, `5d ago`,
/// falling back to the plain date beyond a week. Unparseable or absent
/// timestamps render as `N/A`.
#[must_use]
pub fn format_time_ago(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(parsed) = timestamp.and_then(parse_timestamp) else {
        return "N/A".to_string();
    };

    let minutes = (now - parsed).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format_date(timestamp)
    }
}

/// Formats a timestamp as a short date (`Mar 10, 2024`); `N/A` when absent
/// or unparseable.
#[must_use]
pub fn format_date(timestamp: Option<&str>) -> String {
    timestamp.and_then(parse_timestamp).map_or_else(
        || "N/A".to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// Generates a 20-character bar scaled against `max`. Non-zero values below
/// one slot still get a single block for visibility.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn bar(value: u64, max: u64) -> String {
    const WIDTH: usize = 20;
    if max == 0 {
        return "░".repeat(WIDTH);
    }

    let ratio = value as f64 / max as f64;
    let filled = if value > 0 && ratio * (WIDTH as f64) < 1.0 {
        1
    } else {
        ((ratio * WIDTH as f64).round() as usize).min(WIDTH)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

/// Accepts RFC 3339 timestamps or bare ISO days.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
