//! Error classification for error-valued log fields
//!
//! Errors attached to an entry are rendered through [`ClassifiableError`]
//! rather than by inspecting their shape at runtime. Every classifiable
//! error can describe itself as a message and a stack; HTTP client errors
//! additionally expose the response payload they received.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// Message and stack of an error value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescription {
    pub message: String,
    pub stack: String,
}

/// Normalized form of an error field, JSON-encoded into the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorData {
    pub message: String,
    pub stack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// An error that knows how to present itself in a log record
pub trait ClassifiableError: fmt::Debug + Send + Sync {
    fn describe(&self) -> ErrorDescription;

    /// Response payload, for errors raised by an HTTP client
    fn http_body(&self) -> Option<Value> {
        None
    }
}

/// Build the normalized record for an error value
///
/// The error is described first; the HTTP body is only consulted as a
/// refinement of that description.
pub fn error_data(error: &dyn ClassifiableError) -> ErrorData {
    let ErrorDescription { message, stack } = error.describe();
    ErrorData {
        message,
        stack,
        body: error.http_body(),
    }
}

/// Snapshot of an arbitrary [`std::error::Error`]
///
/// The source chain and (when `RUST_BACKTRACE` enables it) a backtrace are
/// captured at construction time, so the original error does not need to
/// outlive the entry it is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    message: String,
    stack: String,
}

impl CapturedError {
    pub fn new<E>(error: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        let message = error.to_string();

        let mut stack = format!("Error: {}", message);
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push_str("\nCaused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            stack.push('\n');
            stack.push_str(&backtrace.to_string());
        }

        Self { message, stack }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

impl ClassifiableError for CapturedError {
    fn describe(&self) -> ErrorDescription {
        ErrorDescription {
            message: self.message.clone(),
            stack: self.stack.clone(),
        }
    }
}

/// Failure reported by an HTTP client
///
/// When the server answered, the response payload is carried along and
/// ends up as `body` in the normalized error.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientError {
    message: String,
    method: Option<String>,
    url: Option<String>,
    status: Option<u16>,
    response_data: Option<Value>,
}

impl HttpClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            method: None,
            url: None,
            status: None,
            response_data: None,
        }
    }

    /// Record the request that failed
    #[must_use]
    pub fn with_request(mut self, method: impl Into<String>, url: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self.url = Some(url.into());
        self
    }

    /// Record the response the server sent back
    #[must_use]
    pub fn with_response(mut self, status: u16, data: Value) -> Self {
        self.status = Some(status);
        self.response_data = Some(data);
        self
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn response_data(&self) -> Option<&Value> {
        self.response_data.as_ref()
    }
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status {})", status)?;
        }
        Ok(())
    }
}

impl StdError for HttpClientError {}

impl ClassifiableError for HttpClientError {
    fn describe(&self) -> ErrorDescription {
        let message = self.to_string();
        let mut stack = format!("HttpClientError: {}", message);
        if let (Some(method), Some(url)) = (&self.method, &self.url) {
            stack.push_str(&format!("\n    at {} {}", method, url));
        }
        ErrorDescription { message, stack }
    }

    fn http_body(&self) -> Option<Value> {
        self.response_data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed to load config")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_captured_error_message_and_stack() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let captured = CapturedError::new(&err);

        assert_eq!(captured.message(), "boom");
        assert!(captured.stack().starts_with("Error: boom"));
    }

    #[test]
    fn test_captured_error_walks_source_chain() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        let captured = CapturedError::new(&err);

        assert!(captured.stack().contains("Caused by: no such file"));
        assert!(error_data(&captured).body.is_none());
    }

    #[test]
    fn test_http_error_body() {
        let err = HttpClientError::new("Request failed")
            .with_request("GET", "https://api.example.com/users")
            .with_response(404, json!({"x": 1}));

        let data = error_data(&err);
        assert_eq!(data.body, Some(json!({"x": 1})));
        assert!(data.message.contains("404"));
        assert!(data.stack.contains("GET https://api.example.com/users"));
    }

    #[test]
    fn test_http_error_without_response_has_no_body() {
        let err = HttpClientError::new("connection refused");
        let encoded = serde_json::to_string(&error_data(&err)).unwrap();
        assert!(!encoded.contains("body"));
    }
}
