//! Time helpers shared by the session gate and the placement views.
//!
//! Token expiry is expressed in (possibly fractional) seconds since the Unix
//! epoch; stage timestamps arrive either as RFC 3339 instants or bare
//! `YYYY-MM-DD` dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Wall-clock instant as fractional seconds since the epoch.
pub fn unix_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp_millis() as f64 / 1000.0
}

/// Parse a stage timestamp (`2025-01-15` or `2025-01-15T09:30:00Z`).
///
/// Date-only values are taken as midnight UTC. Returns `None` for anything
/// else; callers render the raw text in that case.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Human-readable date, e.g. `Wed, Jan 15, 2025`.
pub fn display_date(at: DateTime<Utc>) -> String {
    at.format("%a, %b %-d, %Y").to_string()
}
