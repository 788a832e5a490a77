//! Defines the scalar values that appear in predicates,
//! category sets and class labels.
use serde::{Serialize, Deserialize};

use std::fmt;


/// A scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean.
    Boolean(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Double(f64),
    /// A string.
    String(String),
}


impl Value {
    /// Returns the numeric view of this value, if any.
    /// Strings are parsed.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Integer(i) => Some(*i as f64),
            Value::Double(d) => Some(*d),
            Value::String(s) => s.trim().parse::<f64>().ok(),
        }
    }


    /// Returns `true` if this value is a `NaN` double.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Double(d) if d.is_nan())
    }


    /// Loose equality used when scoring.
    /// Two numbers compare by value regardless of their variant,
    /// everything else compares structurally.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(_), _) | (_, Value::String(_)) => false,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}


/// A hashable image of a `Value`, used as a cache key.
/// Doubles compare by bit pattern, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Boolean(bool),
    Integer(i64),
    Double(u64),
    String(String),
}


impl From<&Value> for ValueKey {
    #[inline]
    fn from(value: &Value) -> Self {
        match value {
            Value::Boolean(b) => ValueKey::Boolean(*b),
            Value::Integer(i) => ValueKey::Integer(*i),
            Value::Double(d) => {
                let d = if *d == 0.0 { 0.0 } else { *d };
                ValueKey::Double(d.to_bits())
            },
            Value::String(s) => ValueKey::String(s.clone()),
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}


impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}


impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}


impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}


/// Data types of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 64 bit integer.
    Integer,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Boolean.
    Boolean,
    /// String.
    String,
}


impl DataType {
    /// Returns `true` for numeric data types.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float | DataType::Double)
    }
}
