// File: formstate/src/value.rs
// Purpose: Field value types

use serde::{Deserialize, Serialize};

/// A value a form control can hand to the state machine.
///
/// Most controls produce text, but file inputs and similar controls hand over
/// non-textual values. Only textual values are whitespace-trimmed during an
/// update; everything else passes through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Value {
    /// The string representation a validation pattern is tested against.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => {
                // Format number nicely (remove .0 for integers in i64 range;
                // the cast saturates beyond it)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
        }
    }

    /// Trim leading/trailing whitespace from textual values; pass every other
    /// variant through unchanged.
    pub fn normalized(self) -> Value {
        match self {
            Value::Text(s) => Value::Text(s.trim().to_string()),
            other => other,
        }
    }

    /// Borrow the inner text, if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
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

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
