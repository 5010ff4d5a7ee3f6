//! Finalized log record
//!
//! A [`LogRecord`] is built once per emission by `Entry::finalize` and is
//! never retained. Its JSON form is the wire format:
//!
//! ```text
//! {"log":{"level":"info","fields":{"key":"value"},"message":"...","timestamp":"2023-11-30T13:00:00.000Z"}}
//! ```

use super::log_level::{LogLevel, Severity};
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub log: RecordDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDetails {
    pub level: LogLevel,
    pub fields: Map<String, Value>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(with = "timestamp::iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        fields: Map<String, Value>,
        severity: Option<Severity>,
    ) -> Self {
        Self {
            log: RecordDetails {
                level,
                fields,
                message: message.into(),
                severity,
                timestamp: Utc::now(),
            },
        }
    }

    /// Replace the captured timestamp
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.log.timestamp = timestamp;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.log.level
    }

    pub fn message(&self) -> &str {
        &self.log.message
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.log.fields
    }

    pub fn severity(&self) -> Option<Severity> {
        self.log.severity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.log.timestamp
    }

    /// Serialize to a single-line JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 30, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_wire_format() {
        let mut fields = Map::new();
        fields.insert("key".to_string(), json!("value"));

        let record = LogRecord::new(LogLevel::Info, "Info with field", fields, None).at(fixed_time());

        assert_eq!(
            record.to_json().unwrap(),
            r#"{"log":{"level":"info","fields":{"key":"value"},"message":"Info with field","timestamp":"2023-11-30T13:00:00.000Z"}}"#
        );
    }

    #[test]
    fn test_severity_serialized_when_present() {
        let record = LogRecord::new(LogLevel::Error, "Database error", Map::new(), Some(Severity::High))
            .at(fixed_time());

        let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["log"]["severity"], json!("HIGH_SEVERITY"));
        assert_eq!(value["log"]["level"], json!("error"));
    }

    #[test]
    fn test_severity_omitted_when_absent() {
        let record = LogRecord::new(LogLevel::Error, "Database error", Map::new(), None);
        let json = record.to_json().unwrap();
        assert!(!json.contains("severity"));
    }

    #[test]
    fn test_json_roundtrip() {
        let record = LogRecord::new(LogLevel::Warn, "Warning message", Map::new(), None)
            .at(fixed_time());

        let parsed = LogRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed, record);
    }
}
