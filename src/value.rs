//! Typed field values and the documents built from them.
//!
//! Every converted field resolves to one of four shapes. They serialize as
//! plain JSON scalars, so a [`Document`] maps directly onto a JSON object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One converted record: field name to inferred value.
///
/// Key order carries no meaning; a `BTreeMap` keeps serialized output stable.
pub type Document = BTreeMap<String, Value>;

/// An inferred field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// `true` / `false`, matched case-insensitively.
    Bool(bool),
    /// Any float literal, rounded to the configured precision.
    Number(f64),
    /// An empty field (when empty fields map to null).
    Null,
    /// Everything else, kept verbatim.
    Text(String),
}

impl Value {
    /// The boolean, if this is a [`Value::Bool`].
    ///
    /// ```
    /// use csvdoc::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from("true").as_bool(), None);
    /// ```
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is a [`Value::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if this is a [`Value::Text`]. Null is not empty text.
    ///
    /// ```
    /// use csvdoc::Value;
    ///
    /// assert_eq!(Value::from("late").as_str(), Some("late"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short type name, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Null => "null",
            Value::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Null => write!(f, "null"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
