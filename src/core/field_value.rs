//! Field values and layer merging
//!
//! This module provides:
//! - `FieldValue`: the closed set of values a field may hold
//! - `Fields`: one layer of key/value pairs
//! - `merge_layers`: the left-to-right merge that produces a record's fields

use super::classify::{error_data, CapturedError, ClassifiableError};
use super::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// One layer of fields, as attached by a single `with_field(s)` call
pub type Fields = HashMap<String, FieldValue>;

/// Value type for structured logging fields
#[derive(Debug, Clone)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Nested object or array, written to the record as a JSON string
    Object(Value),
    /// Error value, written to the record as a JSON-encoded `ErrorData`
    Error(Arc<dyn ClassifiableError>),
}

impl FieldValue {
    /// Serialize any value into an object field
    ///
    /// Scalars serialize to the matching scalar variant.
    pub fn object<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Capture an arbitrary error as a field value
    pub fn from_error<E: StdError + ?Sized>(error: &E) -> Self {
        FieldValue::Error(Arc::new(CapturedError::new(error)))
    }

    /// Wrap an error that classifies itself
    pub fn classified<E: ClassifiableError + 'static>(error: E) -> Self {
        FieldValue::Error(Arc::new(error))
    }

    /// Normalize into the value stored in a record's `fields`
    ///
    /// Errors become a JSON-encoded `{message, stack, body?}`; objects,
    /// arrays and null become their JSON text; other scalars pass through.
    #[must_use]
    pub fn normalize(&self) -> Value {
        match self {
            FieldValue::Error(error) => encode(&error_data(error.as_ref())),
            FieldValue::Object(value) => encode(value),
            FieldValue::Null => Value::String("null".to_string()),
            scalar => scalar.to_json_value(),
        }
    }

    /// Convert to serde_json::Value without normalization
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Int(i) => Value::Number((*i).into()),
            FieldValue::UInt(u) => Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Null => Value::Null,
            FieldValue::Object(value) => value.clone(),
            FieldValue::Error(error) => {
                serde_json::to_value(error_data(error.as_ref())).unwrap_or(Value::Null)
            }
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Value {
    match serde_json::to_string(value) {
        Ok(text) => Value::String(text),
        Err(e) => {
            eprintln!("[LOGGER ERROR] Failed to encode field value: {}", e);
            Value::Null
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Object(value) => write!(f, "{}", value),
            FieldValue::Error(error) => write!(f, "{}", error.describe().message),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::String(s) => FieldValue::String(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Object(nested),
        }
    }
}

impl From<Map<String, Value>> for FieldValue {
    fn from(map: Map<String, Value>) -> Self {
        FieldValue::Object(Value::Object(map))
    }
}

impl From<Arc<dyn ClassifiableError>> for FieldValue {
    fn from(error: Arc<dyn ClassifiableError>) -> Self {
        FieldValue::Error(error)
    }
}

/// Merge layers left to right into a normalized field mapping
///
/// A key in a later layer replaces the same key from any earlier layer.
pub fn merge_layers<'a, I>(layers: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Fields>,
{
    let mut merged = Map::new();
    for layer in layers {
        append_fields(layer, &mut merged);
    }
    merged
}

fn append_fields(source: &Fields, destination: &mut Map<String, Value>) {
    for (key, value) in source {
        destination.insert(key.clone(), value.normalize());
    }
}
