//! Human-readable rendering of predicted times.

use chrono::{DateTime, Utc};

use crate::prediction::types::{PredictionError, PredictionResult};

/// Layout used in chat messages, always in UTC.
const DATE_FORMAT: &str = "%B %d, %Y, at %H:%M:%S (UTC)";

/// Render `timestamp_ms` as e.g. `September 11, 2022, at 08:12:54 (UTC)`.
pub fn format_utc(timestamp_ms: i64) -> PredictionResult<String> {
    let date: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or(PredictionError::TimestampOutOfRange(timestamp_ms))?;
    Ok(date.format(DATE_FORMAT).to_string())
}
