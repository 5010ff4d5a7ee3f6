//! In-memory appender
//!
//! Keeps every written line together with the stream it was routed to.
//! Clones share the same buffer, so a test can hand one clone to the
//! logger and inspect the output through another.

use crate::core::{Appender, LogRecord, OutputStream, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<(OutputStream, String)>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in write order, with their stream
    pub fn all(&self) -> Vec<(OutputStream, String)> {
        self.lines.lock().clone()
    }

    /// Lines written to one stream
    pub fn lines(&self, stream: OutputStream) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Decoded records in write order
    ///
    /// Lines that do not parse as records are skipped.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lines
            .lock()
            .iter()
            .filter_map(|(_, line)| LogRecord::from_json(line).ok())
            .collect()
    }

    /// Decoded records written to one stream
    pub fn records_for(&self, stream: OutputStream) -> Vec<LogRecord> {
        self.lines(stream)
            .iter()
            .filter_map(|line| LogRecord::from_json(line).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, stream: OutputStream, line: &str) -> Result<()> {
        self.lines.lock().push((stream, line.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
