//! Deployment environment detection against the real process environment
//!
//! Kept in its own test binary with a single test so changes to the
//! environment variable cannot race with other tests.

use rust_field_logger::bootstrap::{Environment, DEPLOYMENT_ENV_VAR, ENVIRONMENT_FIELD};
use rust_field_logger::default_entry;
use serde_json::json;

#[test]
fn test_environment_detection_from_process() {
    std::env::remove_var(DEPLOYMENT_ENV_VAR);
    assert_eq!(Environment::detect(), Environment::Dev);

    // Built on first use, so it sees the unset variable
    let entry = default_entry();
    assert_eq!(entry.layer_count(), 1);
    assert_eq!(entry.fields()[ENVIRONMENT_FIELD], json!("dev"));

    // Only APP_ENV is consulted
    assert_eq!(DEPLOYMENT_ENV_VAR, "APP_ENV");
    std::env::set_var("NODE_ENV", "production");
    assert_eq!(Environment::detect(), Environment::Dev);
    std::env::remove_var("NODE_ENV");

    std::env::set_var(DEPLOYMENT_ENV_VAR, "staging");
    assert_eq!(Environment::detect(), Environment::Qa);

    std::env::set_var(DEPLOYMENT_ENV_VAR, "production");
    assert_eq!(Environment::detect(), Environment::Production);

    // Already initialized, later changes do not rebuild it
    assert_eq!(default_entry().fields()[ENVIRONMENT_FIELD], json!("dev"));

    std::env::remove_var(DEPLOYMENT_ENV_VAR);
}
