//! Main logger implementation

use super::{
    appender::Appender,
    entry::Entry,
    error::Result,
    field_value::FieldValue,
    log_level::{LogLevel, Severity},
    metrics::LoggerMetrics,
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Root logger handle
///
/// Cloning is cheap and every clone shares the same debug flag, appender
/// and metrics. Entries derived from a logger keep a handle to it and read
/// the live debug flag on every debug call.
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
}

struct Shared {
    debug: AtomicBool,
    appender: RwLock<Box<dyn Appender>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to the console with debug output enabled
    #[must_use]
    pub fn new() -> Self {
        Self::with_appender(ConsoleAppender::new())
    }

    #[must_use]
    pub fn with_appender<A: Appender + 'static>(appender: A) -> Self {
        Self::from_parts(true, Box::new(appender))
    }

    fn from_parts(debug: bool, appender: Box<dyn Appender>) -> Self {
        Self {
            shared: Arc::new(Shared {
                debug: AtomicBool::new(debug),
                appender: RwLock::new(appender),
                metrics: LoggerMetrics::new(),
            }),
        }
    }

    pub fn set_debug(&self, enabled: bool) {
        self.shared.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug(&self) -> bool {
        self.shared.debug.load(Ordering::Relaxed)
    }

    /// Fresh entry with no fields
    pub fn new_entry(&self) -> Entry {
        Entry::new(self.clone())
    }

    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.new_entry().with_field(key, value)
    }

    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.new_entry().with_fields(fields)
    }

    pub fn with_error<K, E>(&self, key: K, error: &E) -> Entry
    where
        K: Into<String>,
        E: StdError + ?Sized,
    {
        self.new_entry().with_error(key, error)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.new_entry().log(level, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.new_entry().debug(message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.new_entry().info(message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.new_entry().warn(message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.new_entry().error(message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.new_entry().fatal(message);
    }

    pub fn error_with_severity(&self, message: impl Into<String>, severity: Severity) {
        self.new_entry().error_with_severity(message, severity);
    }

    pub fn fatal_with_severity(&self, message: impl Into<String>, severity: Severity) {
        self.new_entry().fatal_with_severity(message, severity);
    }

    /// Apply the emission policy and write the record for `entry`
    ///
    /// Debug records are dropped while debug output is disabled. Every
    /// other call writes exactly one line to the stream for `level`.
    pub(crate) fn emit(
        &self,
        level: LogLevel,
        entry: &Entry,
        message: String,
        severity: Option<Severity>,
    ) {
        if level == LogLevel::Debug && !self.is_debug() {
            self.shared.metrics.record_suppressed();
            return;
        }

        debug_assert!(severity.is_none() || level.accepts_severity());

        let record = entry.finalize(level, message, severity);
        let line = match record.to_json() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to encode {} record: {}", level, e);
                self.shared.metrics.record_dropped();
                return;
            }
        };

        let mut appender = self.shared.appender.write();
        match appender.append(level.stream(), &line) {
            Ok(()) => {
                self.shared.metrics.record_logged();
            }
            Err(e) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                self.shared.metrics.record_dropped();
            }
        }
    }

    /// Get the number of dropped logs
    pub fn dropped_count(&self) -> u64 {
        self.shared.metrics.dropped_count()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.shared.appender.write().flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_field_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .debug(false)
    ///     .appender(ConsoleAppender::new())
    ///     .build();
    /// assert!(!logger.is_debug());
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("debug", &self.is_debug())
            .field("appender", &self.shared.appender.read().name())
            .finish()
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Err(e) = self.appender.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    debug: bool,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder: debug enabled, console output
    pub fn new() -> Self {
        Self {
            debug: true,
            appender: None,
        }
    }

    /// Set whether debug records are written
    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Set the appender, replacing any previously set
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));
        Logger::from_parts(self.debug, appender)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
