use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::error::{Error, Result};

/// Parse an RFC 3339 reference instant such as `2025-01-15T10:30:00+02:00`.
///
/// # Errors
/// Returns [`Error::InvalidTimestamp`] when the text is not RFC 3339
pub fn parse_reference_time(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|error| Error::InvalidTimestamp {
        input: input.to_owned(),
        reason: error.to_string(),
    })
}

/// The current instant, expressed in `offset` or the system's local offset.
pub fn reference_now(offset: Option<FixedOffset>) -> DateTime<FixedOffset> {
    offset.map_or_else(
        || Local::now().fixed_offset(),
        |fixed| Utc::now().with_timezone(&fixed),
    )
}
