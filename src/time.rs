//! Time utilities for credential expiration.

use chrono::{TimeZone, Utc};

/// DateTime in UTC, the only zone credential expirations are expressed in.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Convert an epoch-millisecond timestamp into a [`DateTime`].
///
/// Returns `None` when the value falls outside the representable range.
pub fn from_timestamp_millis(timestamp_ms: i64) -> Option<DateTime> {
    Utc.timestamp_millis_opt(timestamp_ms).single()
}

/// Convert a [`DateTime`] into epoch milliseconds.
pub fn to_timestamp_millis(time: DateTime) -> i64 {
    time.timestamp_millis()
}
