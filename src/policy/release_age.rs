//! Release-age gate
//!
//! Marketplace metadata can show a new version before the binary is
//! downloadable in every region, so announcing waits a number of days.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::policy::cadence::days_between;

/// Parse `currentVersionReleaseDate`
///
/// Accepts RFC 3339 (`2024-01-15T08:00:00Z`), and naive
/// `2024-01-15T08:00:00` / `2024-01-15` forms taken as UTC.
pub fn parse_release_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(date.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

/// Whether the release has been public for at least `min_days` calendar days
pub fn is_old_enough(release_date: DateTime<Utc>, min_days: u32, now: DateTime<Utc>) -> bool {
    if min_days == 0 {
        return true;
    }
    days_between(release_date, now) >= i64::from(min_days)
}
