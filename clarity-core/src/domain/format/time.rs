// clarity-core/src/domain/format/time.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rendered for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` (read as UTC) and bare dates.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// `Jan 15, 2024, 02:30:45 PM` (UTC).
pub fn format_date_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M:%S %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// `Jan 9`, the chart axis label for daily trend points.
pub fn format_short_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Relative phrase against the current clock.
pub fn format_relative_time(value: &str) -> String {
    format_relative_time_at(value, Utc::now())
}

/// Coarsest non-zero unit among days, hours and minutes; under a minute
/// (or in the future) is "Just now".
pub fn format_relative_time_at(value: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(value) else {
        return INVALID_DATE.to_string();
    };
    let diff_ms = (now - then).num_milliseconds();

    let minutes = diff_ms.div_euclid(60_000);
    let hours = diff_ms.div_euclid(3_600_000);
    let days = diff_ms.div_euclid(86_400_000);

    if days > 0 {
        past_phrase(days, "day", Some("yesterday"))
    } else if hours > 0 {
        past_phrase(hours, "hour", None)
    } else if minutes > 0 {
        past_phrase(minutes, "minute", None)
    } else {
        "Just now".to_string()
    }
}

// Mirrors the en "numeric: auto" style: only the day unit has a word for -1.
fn past_phrase(amount: i64, unit: &str, one_word: Option<&str>) -> String {
    match (amount, one_word) {
        (1, Some(word)) => word.to_string(),
        (1, None) => format!("1 {} ago", unit),
        (n, _) => format!("{} {}s ago", n, unit),
    }
}
