//! Instant and epoch-millisecond conversions for VISS timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{VissError, VissResult};

/// Parse an ISO-8601 instant into a UTC datetime.
pub fn parse_instant(timestamp: &str) -> VissResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| VissError::InvalidTime(format!("{}: {}", timestamp, e)))
}

/// Format a UTC datetime the way VISS expects instants (millisecond precision).
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert an ISO-8601 instant string to its epoch-millisecond decimal string.
pub fn to_epoch_millis(timestamp: &str) -> VissResult<String> {
    Ok(parse_instant(timestamp)?.timestamp_millis().to_string())
}

/// Convert an epoch-millisecond decimal string back to an ISO-8601 instant.
pub fn from_epoch_millis(millis: &str) -> VissResult<String> {
    let count: i64 = millis
        .parse()
        .map_err(|_| VissError::InvalidTime(format!("not an epoch-millisecond count: {}", millis)))?;

    let instant = DateTime::<Utc>::from_timestamp_millis(count).ok_or_else(|| {
        VissError::InvalidTime(format!("epoch milliseconds out of range: {}", count))
    })?;

    Ok(format_instant(&instant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_epoch_millis() {
        assert_eq!(
            to_epoch_millis("2020-01-01T00:00:00Z").unwrap(),
            "1577836800000"
        );
        assert_eq!(
            to_epoch_millis("2020-01-01T00:00:00.000Z").unwrap(),
            "1577836800000"
        );
    }

    #[test]
    fn test_from_epoch_millis() {
        assert_eq!(
            from_epoch_millis("1577836800000").unwrap(),
            "2020-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_round_trip() {
        for timestamp in ["2020-01-01T00:00:00Z", "2024-06-15T13:37:42.123Z"] {
            let millis = to_epoch_millis(timestamp).unwrap();
            let restored = from_epoch_millis(&millis).unwrap();
            assert_eq!(to_epoch_millis(&restored).unwrap(), millis);
        }
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        assert_eq!(
            to_epoch_millis("2020-01-01T01:00:00+01:00").unwrap(),
            "1577836800000"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(to_epoch_millis("not-a-time").is_err());
        assert!(from_epoch_millis("not-a-number").is_err());
    }
}
