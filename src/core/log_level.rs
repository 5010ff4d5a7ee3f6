//! Log level and severity definitions

use super::appender::OutputStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Stream a record at this level is written to
    pub fn stream(&self) -> OutputStream {
        match self {
            LogLevel::Debug | LogLevel::Info => OutputStream::Standard,
            LogLevel::Warn => OutputStream::Warning,
            LogLevel::Error | LogLevel::Fatal => OutputStream::Error,
        }
    }

    /// Whether a severity may be attached to records at this level
    pub fn accepts_severity(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Fatal)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Descriptive severity attached to error and fatal records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "LOW_SEVERITY")]
    Low,
    #[serde(rename = "MEDIUM_SEVERITY")]
    Medium,
    #[serde(rename = "HIGH_SEVERITY")]
    High,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW_SEVERITY",
            Severity::Medium => "MEDIUM_SEVERITY",
            Severity::High => "HIGH_SEVERITY",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" | "LOW_SEVERITY" => Ok(Severity::Low),
            "MEDIUM" | "MEDIUM_SEVERITY" => Ok(Severity::Medium),
            "HIGH" | "HIGH_SEVERITY" => Ok(Severity::High),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_routing() {
        assert_eq!(LogLevel::Debug.stream(), OutputStream::Standard);
        assert_eq!(LogLevel::Info.stream(), OutputStream::Standard);
        assert_eq!(LogLevel::Warn.stream(), OutputStream::Warning);
        assert_eq!(LogLevel::Error.stream(), OutputStream::Error);
        assert_eq!(LogLevel::Fatal.stream(), OutputStream::Error);
    }

    #[test]
    fn test_only_error_levels_accept_severity() {
        let accepting: Vec<LogLevel> = LogLevel::ALL
            .iter()
            .copied()
            .filter(LogLevel::accepts_severity)
            .collect();
        assert_eq!(accepting, vec![LogLevel::Error, LogLevel::Fatal]);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
        assert_eq!(serde_json::to_string(&LogLevel::Fatal).unwrap(), "\"fatal\"");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(
            serde_json::to_string(&Severity::High).unwrap(),
            "\"HIGH_SEVERITY\""
        );
        assert_eq!("medium".parse::<Severity>(), Ok(Severity::Medium));
        assert_eq!(Severity::Low.to_string(), "LOW_SEVERITY");
    }
}
