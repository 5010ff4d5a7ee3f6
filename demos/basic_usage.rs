//! Basic logger usage example
//!
//! Demonstrates chained fields, level routing and error fields.
//!
//! Run with: cargo run --example basic_usage

use rust_field_logger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    let logger = Logger::new();

    // Levels: debug/info go to stdout, warn/error/fatal to stderr
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error_with_severity("This is an error message", Severity::Medium);

    // Debug output can be switched off at runtime
    logger.set_debug(false);
    logger.debug("Debug message (hidden)");
    logger.set_debug(true);

    // Entries are immutable; each with_field returns a new one
    let request = logger.with_fields([("request_id", "abc-123"), ("route", "/users")]);
    request.with_field("status", 200).info("Request processed");
    request.with_field("body", json!({"name": "alice"})).info("Request body");

    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    request.with_error("error", &err).error("Request failed");

    let http = HttpClientError::new("Request failed with status code 404")
        .with_request("GET", "https://api.example.com/users/7")
        .with_response(404, json!({"error": "not found"}));
    request
        .with_field("error", FieldValue::classified(http))
        .warn("User lookup failed");

    // The process-wide default carries the deployment environment
    default_entry().info("Using the default entry");

    logger.flush()
}
