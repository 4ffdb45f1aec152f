use crate::Result;
use chrono::{DateTime, Utc};

/// Parse an API timestamp (RFC 3339 / ISO 8601) into a UTC instant.
///
/// The backend emits timestamps with an offset (`2024-03-01T08:30:00Z` or
/// `+03:00` for Nairobi time); both normalize to UTC here.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)?;
    Ok(parsed.with_timezone(&Utc))
}
