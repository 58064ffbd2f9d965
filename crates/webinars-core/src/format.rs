//! Display helpers for webinar cards

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, WebinarError};

// en-US long form: "Sunday, June 15, 2025 at 10:00 AM"
const DISPLAY_FORMAT: &str = "%A, %B %-d, %Y at %I:%M %p";

// `%.f` also matches an absent fraction
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an ISO-8601 timestamp into `tz`.
///
/// Accepted forms, in order:
/// - with an offset (`2025-06-15T10:00:00Z`): the instant it names
/// - without an offset (`2025-06-15T10:00:00`): wall-clock time in `tz`
/// - date only (`2025-06-15`): midnight UTC
pub fn parse_date<Tz: TimeZone>(iso: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let iso = iso.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(iso) {
        return Ok(instant.with_timezone(tz));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, LOCAL_DATETIME_FORMAT) {
        // Skipped by a DST jump: nothing to show
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| WebinarError::InvalidDate(iso.to_string()));
    }

    if let Ok(day) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        let midnight = day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        if let Some(midnight) = midnight {
            return Ok(midnight.with_timezone(tz));
        }
    }

    Err(WebinarError::InvalidDate(iso.to_string()))
}

/// Render an ISO-8601 timestamp for display in the given timezone
pub fn format_date<Tz>(iso: &str, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    Ok(parse_date(iso, tz)?.format(DISPLAY_FORMAT).to_string())
}

/// [`format_date`] in UTC
pub fn format_date_utc(iso: &str) -> Result<String> {
    format_date(iso, &Utc)
}

/// First letter of every whitespace-separated word, upper-cased.
///
/// Honorifics count as words: `"Dr. Sumitra Meena"` gives `"DSM"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}
