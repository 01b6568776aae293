//! Event date parsing

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DomainError;

/// Parse an ISO-8601 event date.
///
/// Accepts a full RFC 3339 timestamp (`2025-06-01T18:30:00Z`, any offset) or a
/// bare calendar date (`2025-06-01`), which is taken as midnight UTC.
pub fn parse_event_date(input: &str) -> Result<DateTime<Utc>, DomainError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::ValidationError(format!("invalid ISO-8601 date: {input}")))
}
