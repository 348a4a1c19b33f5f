//! Dynamic casting over `serde_json::Value`.
//!
//! A cast succeeds only when the runtime kind of the value matches the target
//! exactly. Supported targets:
//!
//! | Target                 | Accepts                                  |
//! |------------------------|------------------------------------------|
//! | `bool`                 | `true` / `false`                         |
//! | `i64`                  | integers representable as `i64`          |
//! | `u64`                  | non-negative integers                    |
//! | `f64`                  | floating point numbers only (not `3`)    |
//! | `String`               | strings                                  |
//! | `Vec<Value>`           | arrays                                   |
//! | `Map<String, Value>`   | objects                                  |
//!
//! There is no numeric widening: `json!(3)` is not an `f64` and `json!(3.0)`
//! is not an `i64`.

use serde_json::{Map, Value};

/// A type a dynamic [`Value`] can be cast into.
pub trait CastTarget: Sized {
    /// Name used in cast mismatch errors.
    const KIND: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl CastTarget for bool {
    const KIND: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl CastTarget for i64 {
    const KIND: &'static str = "i64";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl CastTarget for u64 {
    const KIND: &'static str = "u64";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl CastTarget for f64 {
    const KIND: &'static str = "f64";

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_f64() {
            value.as_f64()
        } else {
            None
        }
    }
}

impl CastTarget for String {
    const KIND: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl CastTarget for Vec<Value> {
    const KIND: &'static str = "array";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl CastTarget for Map<String, Value> {
    const KIND: &'static str = "object";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

/// Runtime kind of a value, in the vocabulary of cast errors.
pub fn kind_of(value: Option<&Value>) -> &'static str {
    match value {
        None | Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(n)) if n.is_f64() => "f64",
        Some(Value::Number(n)) if n.is_u64() => "u64",
        Some(Value::Number(_)) => "i64",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
