//! Cell values for frame columns
//!
//! A `Value` is one cell of a frame column. Columns are heterogeneous by
//! type at the cell level; loaders are expected to keep each column
//! uniform, and the typed accessors surface any drift.

use std::fmt;

/// A single cell in a frame column
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value (CSV empty field, absent JSON key before filling)
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value. Booleans count as 0/1 so indicator
    /// columns can participate in positive-count aggregates.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// True when the value is numerically positive (or a `true` boolean).
    /// Null and string values are never positive.
    pub fn is_positive(&self) -> bool {
        match self {
            Value::Int(v) => *v > 0,
            Value::Float(v) => *v > 0.0,
            Value::Bool(v) => *v,
            _ => false,
        }
    }
}

/// CSV cell encoding: null renders as the empty field
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Option<String>> for Value {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(s) => Value::Str(s),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
