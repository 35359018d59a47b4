//! Date/time utilities for Kathavanam.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// Second-resolution timestamp format used in story note names.
pub const NOTE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format a UTC datetime in the given timezone.
///
/// An empty timezone means the host's local time. An unknown timezone
/// name falls back to UTC.
pub fn format_in_timezone(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    if timezone.is_empty() {
        return dt.with_timezone(&Local).format(format).to_string();
    }
    match timezone.parse::<Tz>() {
        Ok(tz) => dt.with_timezone(&tz).format(format).to_string(),
        Err(_) => dt.format(format).to_string(),
    }
}

/// Timestamp portion of a story note name (`YYYYMMDD_HHMMSS`).
pub fn note_timestamp(dt: &DateTime<Utc>, timezone: &str) -> String {
    format_in_timezone(dt, timezone, NOTE_TIMESTAMP_FORMAT)
}
