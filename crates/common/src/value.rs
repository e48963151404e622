//! Runtime value representation for the GLEAM VM.
//!
//! Values are what live on the stack and in memory during execution.

use std::fmt;

/// Runtime value representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// Opaque text: an address or a serialized block reference.
    Text(String),
    /// An unwritten memory cell, or the result of a program that never
    /// reached RETURN.
    Undefined,
}

impl Value {
    /// Interpret a bound argument token.
    ///
    /// A token in canonical integer form becomes [`Value::Int`]. Anything
    /// else, including `007`, `+5` and `-0`, stays verbatim as
    /// [`Value::Text`] so that it displays exactly as it was bound.
    pub fn from_literal(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) if n.to_string() == token => Value::Int(n),
            _ => Value::Text(token.to_string()),
        }
    }

    /// Returns the integer if this value is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view used by PRINT: integers, and text that parses as one.
    pub fn coerce_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Undefined => None,
        }
    }

    /// True only for the integer zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Int(0))
    }

    /// Name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Int(b as i64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
