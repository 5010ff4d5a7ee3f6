//! Timestamp formatting for log records
//!
//! Records carry an ISO 8601 UTC timestamp with millisecond precision,
//! e.g. `2023-11-30T13:00:00.000Z`, which sorts lexically and is accepted
//! by log aggregation tools (Elasticsearch, Loki, etc.).

use chrono::{DateTime, Utc};

/// strftime pattern for record timestamps
pub const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format a timestamp the way it appears in a record
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_field_logger::core::timestamp::format_iso8601;
///
/// let at = Utc.with_ymd_and_hms(2023, 11, 30, 13, 0, 0).unwrap();
/// assert_eq!(format_iso8601(&at), "2023-11-30T13:00:00.000Z");
/// ```
#[must_use]
pub fn format_iso8601(datetime: &DateTime<Utc>) -> String {
    datetime.format(ISO8601_MILLIS).to_string()
}

/// Serde adapter for `DateTime<Utc>` fields using [`format_iso8601`]
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(datetime: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_iso8601(datetime))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
