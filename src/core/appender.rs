//! Appender trait for log output destinations

use super::error::Result;
use std::fmt;

/// Logical output stream a record is routed to
///
/// Warnings keep their own stream even where the physical sink maps it
/// onto the same file descriptor as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    Standard,
    Warning,
    Error,
}

impl OutputStream {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutputStream::Standard => "standard",
            OutputStream::Warning => "warning",
            OutputStream::Error => "error",
        }
    }
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Receives one pre-serialized JSON line per emitted record
pub trait Appender: Send + Sync {
    fn append(&mut self, stream: OutputStream, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
