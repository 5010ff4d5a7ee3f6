//! Core logger types and traits

pub mod appender;
pub mod classify;
pub mod entry;
pub mod error;
pub mod field_value;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::{Appender, OutputStream};
pub use classify::{
    error_data, CapturedError, ClassifiableError, ErrorData, ErrorDescription, HttpClientError,
};
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use field_value::{merge_layers, FieldValue, Fields};
pub use log_level::{LogLevel, Severity};
pub use log_record::{LogRecord, RecordDetails};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
