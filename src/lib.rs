//! # Rust Field Logger
//!
//! Structured logging with immutable, chainable context. Every emitted
//! record is one line of JSON.
//!
//! ## Features
//!
//! - **Immutable entries**: `with_field` returns a new entry, never mutates
//! - **Deterministic merge**: later fields win over earlier ones
//! - **Error fields**: errors are rendered as `{message, stack, body?}`
//! - **Level routing**: standard, warning and error streams
//!
//! ```
//! use rust_field_logger::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let logger = Logger::with_appender(memory.clone());
//!
//! logger.with_field("key", "value").info("Info with field");
//!
//! let record = &memory.records()[0];
//! assert_eq!(record.message(), "Info with field");
//! ```

pub mod appenders;
pub mod bootstrap;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::bootstrap::{default_entry, Environment};
    pub use crate::core::{
        Appender, ClassifiableError, Entry, FieldValue, Fields, HttpClientError, LogLevel,
        LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, OutputStream, Result,
        Severity,
    };
}

#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use appenders::{ConsoleAppender, MemoryAppender};
pub use bootstrap::{bootstrap, default_entry, Environment, DEPLOYMENT_ENV_VAR};
pub use core::{
    Appender, CapturedError, ClassifiableError, Entry, ErrorData, ErrorDescription, FieldValue,
    Fields, HttpClientError, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, OutputStream, Result, Severity,
};
