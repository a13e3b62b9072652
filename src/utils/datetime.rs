//! Display-date formatting for backend timestamps.
//!
//! The backend hands the frontend opaque ISO-like timestamp strings
//! (scan upload times, submission dates). Everything user-visible goes
//! through `format_display_date`, which normalizes to `YYYY/MM/DD HH:mm`.

use crate::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display pattern used across the app: four-digit year, zero-padded
/// month/day/hour/minute, 24-hour clock.
const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Format an ISO-like timestamp string as `YYYY/MM/DD HH:mm`.
///
/// Empty (or whitespace-only) input is not an error: it formats to the
/// empty string without a parse attempt, so absent timestamps render as
/// blank cells. Input that is present but unparseable returns
/// `AppError::InvalidDate`, letting the caller pick the fallback
/// presentation instead of receiving a sentinel string.
pub fn format_display_date(input: &str) -> AppResult<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let parsed =
        parse_timestamp(input).ok_or_else(|| AppError::InvalidDate(input.to_string()))?;
    Ok(parsed.format(DISPLAY_FORMAT).to_string())
}

/// Lossy variant for display paths that cannot surface errors:
/// unparseable input collapses to the empty string.
pub fn format_display_date_or_empty(input: &str) -> String {
    match format_display_date(input) {
        Ok(formatted) => formatted,
        Err(_) => {
            log::warn!("dropping unparseable timestamp '{}' from display", input);
            String::new()
        }
    }
}

/// Parse the timestamp shapes the backend actually sends.
///
/// Offset-carrying RFC 3339 values are formatted in the offset they
/// carry rather than converted to the local zone, so output is stable
/// regardless of where the app runs.
fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_local());
    }

    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Some(naive);
        }
    }

    // Bare dates render as midnight
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
