//! Logging macros for ergonomic log message formatting.
//!
//! The level macros work on anything with a `log(level, message)` method,
//! so both a [`Logger`](crate::Logger) and an [`Entry`](crate::Entry) can be
//! the target.
//!
//! # Examples
//!
//! ```
//! use rust_field_logger::prelude::*;
//! use rust_field_logger::{fields, info};
//!
//! let logger = Logger::with_appender(MemoryAppender::new());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! let request = logger.with_fields(fields! {
//!     "request_id" => "abc-123",
//!     "attempt" => 2,
//! });
//! info!(request, "Handling request for {}", "/users");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # let logger = Logger::with_appender(MemoryAppender::new());
/// use rust_field_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($target:expr, $level:expr, $($arg:tt)+) => {
        $target.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # let logger = Logger::with_appender(MemoryAppender::new());
/// use rust_field_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger.with_field("code", 500), "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($target:expr, $($arg:tt)+) => {
        $crate::log!($target, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Build a [`Fields`](crate::Fields) layer from `key => value` pairs.
///
/// Values may be of different types; each is converted with
/// `FieldValue::from`.
///
/// # Examples
///
/// ```
/// use rust_field_logger::fields;
///
/// let layer = fields! { "user_id" => 42, "name" => "alice", "admin" => false };
/// assert_eq!(layer.len(), 3);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut layer = $crate::Fields::new();
        $(
            layer.insert(
                ::std::string::String::from($key),
                $crate::FieldValue::from($value),
            );
        )+
        layer
    }};
}
