//! Console appender implementation

use crate::core::{Appender, LoggerError, OutputStream, Result};
use std::io::Write;

/// Writes each record line to the process console
///
/// Standard records go to stdout. Warnings and errors both go to stderr,
/// the only other stream a process has.
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }

    fn write_line<W: Write>(mut out: W, stream: OutputStream, line: &str) -> Result<()> {
        writeln!(out, "{}", line).map_err(|e| {
            LoggerError::io_operation(
                format!("writing {} record", stream),
                "console write failed",
                e,
            )
        })
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, stream: OutputStream, line: &str) -> Result<()> {
        match stream {
            OutputStream::Standard => Self::write_line(std::io::stdout().lock(), stream, line),
            OutputStream::Warning | OutputStream::Error => {
                Self::write_line(std::io::stderr().lock(), stream, line)
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_appends_newline() {
        let mut buffer = Vec::new();
        ConsoleAppender::write_line(&mut buffer, OutputStream::Standard, "{\"log\":{}}").unwrap();
        assert_eq!(buffer, b"{\"log\":{}}\n");
    }

    #[test]
    fn test_console_append_all_streams() {
        let mut appender = ConsoleAppender::new();
        appender.append(OutputStream::Standard, "{}").unwrap();
        appender.append(OutputStream::Warning, "{}").unwrap();
        appender.append(OutputStream::Error, "{}").unwrap();
        appender.flush().unwrap();
        assert_eq!(appender.name(), "console");
    }
}
