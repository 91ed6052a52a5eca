//! The tree value model shared by every codec stage.
//!
//! A [`Value`] is either a scalar (null, boolean, integer, string) or a
//! container (list, map). Records handed to the tabular codec are `Map`
//! values; everything below them may nest arbitrarily.
//!
//! # Notes
//! - Maps are backed by `BTreeMap`, so key iteration (and serialized JSON)
//!   is always in sorted key order.
//! - Floating-point numbers are deliberately unrepresentable. JSON input
//!   containing a float fails deserialization rather than being silently
//!   truncated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A nested tree value: scalar, list, or string-keyed map.
///
/// Serialization is untagged, so a `Value` round-trips through plain JSON
/// (`null`, `true`, `7`, `"text"`, `[..]`, `{..}`).
///
/// # Example
///
/// ```
/// use treetab::Value;
///
/// let v: Value = serde_json::from_str(r#"{"name":"host1","ports":[80,443]}"#)?;
/// assert!(v.as_map().is_some());
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// UTF-8 string scalar.
    Str(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Named fields, iterated in sorted key order.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Create an empty map value.
    #[must_use]
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty list value.
    #[must_use]
    pub fn list() -> Self {
        Value::List(Vec::new())
    }

    /// Whether this value is a scalar (anything but a list or map).
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Whether this value is the explicit null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the underlying map, if this is a `Map`.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Mutably borrow the underlying map, if this is a `Map`.
    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow the underlying list, if this is a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Short lowercase name of this value's kind, for error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
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

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
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

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
