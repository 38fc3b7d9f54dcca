//! Timestamp conversion.
//!
//! The routing provider reports departure and arrival as ISO-8601 strings
//! with an explicit zone (`2021-01-05T09:46:08-05:00` or `...Z`); the toll
//! service wants Unix epoch seconds.

use chrono::DateTime;

/// Error returned when a timestamp cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimestampError {
    input: String,
    reason: String,
}

impl TimestampError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Convert an ISO-8601 timestamp with a zone designator to epoch seconds.
///
/// `Z` means UTC. A timestamp without a zone is rejected rather than
/// guessed. Fractional seconds are truncated.
///
/// # Examples
///
/// ```
/// use toll_quote::domain::parse_iso8601_to_epoch;
///
/// assert_eq!(parse_iso8601_to_epoch("2021-01-05T09:46:40Z").unwrap(), 1609840000);
/// assert_eq!(parse_iso8601_to_epoch("2021-01-05T04:46:40-05:00").unwrap(), 1609840000);
/// assert!(parse_iso8601_to_epoch("2021-01-05T09:46:40").is_err());
/// ```
pub fn parse_iso8601_to_epoch(text: &str) -> Result<i64, TimestampError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TimestampError {
            input: text.to_string(),
            reason: "empty timestamp".to_string(),
        });
    }

    let parsed = DateTime::parse_from_rfc3339(trimmed).map_err(|e| TimestampError {
        input: text.to_string(),
        reason: e.to_string(),
    })?;

    // `timestamp()` drops the sub-second part; only differs from
    // truncation before 1970, which routes never report.
    Ok(parsed.timestamp())
}
