//! Dynamically typed row value

use chrono::{DateTime, FixedOffset};

/// A single column value as decoded by a source
///
/// The variant is discovered at runtime, per value; two rows may carry
/// different variants in the same column.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// SQL NULL / absent
    #[default]
    Null,
    /// UTF-8 text
    Text(String),
    /// Raw bytes, not necessarily UTF-8
    Bytes(Vec<u8>),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Point in time with the offset it was read in
    Timestamp(DateTime<FixedOffset>),
    /// Boolean
    Bool(bool),
    /// Unsigned integer too wide for i64
    U64(u64),
    /// Double precision float
    F64(f64),
    /// Anything else the driver produced, kept structurally
    Other(serde_json::Value),
}

impl Value {
    /// Returns true for `Value::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the runtime variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::Timestamp(_) => "timestamp",
            Value::Bool(_) => "bool",
            Value::U64(_) => "u64",
            Value::F64(_) => "f64",
            Value::Other(_) => "other",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::F64(f)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(t)
    }
}

/// Untyped JSON decoding: integers prefer i64, then u64, then f64
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::U64(u)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Text(s),
            other => Value::Other(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_from_option() {
        let some: Value = Some(7i64).into();
        let none: Value = Option::<i64>::None.into();
        assert_eq!(some, Value::I64(7));
        assert_eq!(none, Value::Null);
    }

    #[test]
    fn test_from_json() {
        use serde_json::json;

        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(-3)), Value::I64(-3));
        assert_eq!(Value::from(json!(u64::MAX)), Value::U64(u64::MAX));
        assert_eq!(Value::from(json!(0.5)), Value::F64(0.5));
        assert_eq!(Value::from(json!("s")), Value::from("s"));
        assert_eq!(Value::from(json!([1])), Value::Other(json!([1])));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from("a").kind(), "text");
        assert_eq!(Value::from(vec![0u8]).kind(), "bytes");
        assert_eq!(Value::from(1i32).kind(), "i32");
        assert_eq!(Value::Other(serde_json::json!([1])).kind(), "other");
    }
}
