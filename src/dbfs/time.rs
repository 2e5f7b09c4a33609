//! Conversion of wire timestamps into state timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// Converts epoch milliseconds into an RFC3339 UTC string with a `Z` suffix
/// and seconds precision, e.g. `1700000000000` → `2023-11-14T22:13:20Z`.
///
/// Out-of-range inputs fall back to the epoch.
#[must_use]
pub fn millis_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
