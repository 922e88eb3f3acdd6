use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::Error;

/// Timestamp layouts without an offset, read as local time.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Format a date-like string as e.g. `3rd Jun 2024`.
pub fn format_date(s: &str) -> Result<String, Error> {
    let date = parse_local_date(s)?;
    let day = date.day();

    Ok(format!(
        "{}{} {}",
        day,
        ordinal_suffix(day),
        date.format("%b %Y")
    ))
}

/// Parse a date-like string into a calendar date in the local timezone.
///
/// Plain dates are taken as written. Timestamps with an offset are converted to local time first.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, Error> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).date_naive());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| Error::InvalidDate(s.to_string()))
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}
