//! Process-wide default entry
//!
//! The default entry is built on first use from a console [`Logger`] and
//! carries one `environment` field describing the deployment.

use crate::core::{Entry, FieldValue, Fields, Logger};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Environment variable naming the deployment environment
///
/// Read in place of `NODE_ENV`. Deployments that only set `NODE_ENV`
/// must also set `APP_ENV`, otherwise they are reported as `dev`.
pub const DEPLOYMENT_ENV_VAR: &str = "APP_ENV";

/// Field name the environment is recorded under
pub const ENVIRONMENT_FIELD: &str = "environment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Qa,
    Dev,
}

impl Environment {
    /// Map a raw deployment name
    ///
    /// `production` stays production and `staging` is reported as `qa`.
    /// Anything else, including a missing value, is `dev`.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Environment::Production,
            Some("staging") => Environment::Qa,
            _ => Environment::Dev,
        }
    }

    /// Read [`DEPLOYMENT_ENV_VAR`] from the process environment
    pub fn detect() -> Self {
        Self::from_value(std::env::var(DEPLOYMENT_ENV_VAR).ok().as_deref())
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Qa => "qa",
            Environment::Dev => "dev",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl From<Environment> for FieldValue {
    fn from(environment: Environment) -> Self {
        FieldValue::String(environment.to_str().to_string())
    }
}

/// Entry seeded with `fields` plus the `environment` field, in one layer
pub fn bootstrap(logger: &Logger, environment: Environment, fields: Fields) -> Entry {
    let mut fields = fields;
    fields.insert(ENVIRONMENT_FIELD.to_string(), environment.into());
    logger.with_fields(fields)
}

/// The process-wide default entry
///
/// # Example
///
/// ```no_run
/// use rust_field_logger::default_entry;
///
/// default_entry().with_field("port", 8080).info("Server started");
/// ```
pub fn default_entry() -> &'static Entry {
    static DEFAULT: OnceLock<Entry> = OnceLock::new();
    DEFAULT.get_or_init(|| bootstrap(&Logger::new(), Environment::detect(), Fields::new()))
}
