//! Immutable, chainable field context
//!
//! An [`Entry`] is a persistent list of field layers. Adding fields never
//! touches the receiver: the new entry gets one more layer whose parent is
//! the receiver's head, so siblings derived from a common ancestor share
//! the ancestor's layers and nothing else.
//!
//! # Example
//!
//! ```
//! use rust_field_logger::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let logger = Logger::with_appender(memory.clone());
//!
//! let request = logger.with_field("request_id", "abc-123");
//! request.with_field("status", 200).info("Request processed");
//! request.warn("Slow request");
//!
//! assert_eq!(memory.len(), 2);
//! ```

use super::field_value::{merge_layers, FieldValue, Fields};
use super::log_level::{LogLevel, Severity};
use super::log_record::LogRecord;
use super::logger::Logger;
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

struct Layer {
    fields: Fields,
    parent: Option<Arc<Layer>>,
}

#[derive(Clone)]
pub struct Entry {
    logger: Logger,
    head: Option<Arc<Layer>>,
    depth: usize,
}

impl Entry {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            logger,
            head: None,
            depth: 0,
        }
    }

    /// New entry with one extra layer holding `key: value`
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut fields = Fields::with_capacity(1);
        fields.insert(key.into(), value.into());
        self.push_layer(fields)
    }

    /// New entry with one extra layer holding a copy of `fields`
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let fields = fields
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.push_layer(fields)
    }

    /// Shorthand for `with_field(key, FieldValue::from_error(error))`
    #[must_use]
    pub fn with_error<K, E>(&self, key: K, error: &E) -> Entry
    where
        K: Into<String>,
        E: StdError + ?Sized,
    {
        self.with_field(key, FieldValue::from_error(error))
    }

    fn push_layer(&self, fields: Fields) -> Entry {
        Entry {
            logger: self.logger.clone(),
            head: Some(Arc::new(Layer {
                fields,
                parent: self.head.clone(),
            })),
            depth: self.depth + 1,
        }
    }

    /// Number of layers attached so far
    pub fn layer_count(&self) -> usize {
        self.depth
    }

    /// Layers in insertion order, oldest first
    fn layers(&self) -> Vec<&Fields> {
        let mut layers = Vec::with_capacity(self.depth);
        let mut cursor = self.head.as_deref();
        while let Some(layer) = cursor {
            layers.push(&layer.fields);
            cursor = layer.parent.as_deref();
        }
        layers.reverse();
        layers
    }

    /// Merged and normalized fields of all layers
    pub fn fields(&self) -> Map<String, Value> {
        merge_layers(self.layers())
    }

    /// Build the record for one emission
    ///
    /// Pure apart from capturing the current time.
    pub fn finalize(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        severity: Option<Severity>,
    ) -> LogRecord {
        LogRecord::new(level, message, self.fields(), severity)
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Set the debug flag of the owning logger, for every entry sharing it
    pub fn set_debug(&self, enabled: bool) {
        self.logger.set_debug(enabled);
    }

    pub fn is_debug(&self) -> bool {
        self.logger.is_debug()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.logger.emit(level, self, message.into(), None);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn error_with_severity(&self, message: impl Into<String>, severity: Severity) {
        self.logger
            .emit(LogLevel::Error, self, message.into(), Some(severity));
    }

    pub fn fatal_with_severity(&self, message: impl Into<String>, severity: Severity) {
        self.logger
            .emit(LogLevel::Fatal, self, message.into(), Some(severity));
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("logger", &self.logger)
            .field("fields", &self.fields())
            .finish()
    }
}
