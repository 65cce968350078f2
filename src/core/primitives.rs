use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{DatasetError, DatasetResult};

/// Formats a timestamp the way browsers print `Date#toISOString`:
/// UTC, millisecond precision, `Z` suffix.
#[must_use]
pub fn format_generated_at(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_generated_at(value: &str) -> DatasetResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| DatasetError::InvalidData(format!("invalid generatedAt `{value}`: {e}")))
}
