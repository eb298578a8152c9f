//! Timestamp parsing and display formatting.
//!
//! Responses render `createdAt` as `YYYY-MM-DD HH:MM:SS` in the server's local
//! time zone. Filter bounds accept that same pattern back, as well as RFC 3339
//! and a bare date:
//!
//! | Input                        | Interpretation             |
//! |------------------------------|----------------------------|
//! | `2024-04-01T12:30:00Z`       | RFC 3339, explicit offset  |
//! | `2024-04-01 12:30:00`        | local time                 |
//! | `2024-04-01T12:30:00`        | local time                 |
//! | `2024-04-01`                 | local midnight             |

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Output pattern for `createdAt`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("'{0}' is not a valid date-time (expected RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD')")]
    Unrecognized(String),

    #[error("'{0}' does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

/// Parses a filter bound into a UTC instant.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TimestampError::Unrecognized(input.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TimestampError::NonexistentLocalTime(input.to_string()))
}

/// Renders a stored timestamp for API responses.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(DISPLAY_FORMAT)
        .to_string()
}
