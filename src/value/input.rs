//! Caller-supplied input, kept exactly as given.

use serde_json::Value;

use super::key::Key;

/// A native, dynamically-typed value tree built by the caller.
///
/// Maps keep their entries in caller order and may mix text and symbol
/// keys; nothing is checked until validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Seq(Vec<RawValue>),
    Map(Vec<(Key, RawValue)>),
}

impl RawValue {
    /// Build a map from `(key, value)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<RawValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        RawValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from values.
    pub fn seq<V, I>(items: I) -> Self
    where
        V: Into<RawValue>,
        I: IntoIterator<Item = V>,
    {
        RawValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::seq(items)
    }
}

/// Input to a structured value, exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// JSON-encoded text
    Json(String),
    /// A native value tree
    Native(RawValue),
    /// An already-decoded JSON tree
    Value(Value),
}

impl Input {
    /// The null input.
    pub fn null() -> Self {
        Input::Native(RawValue::Null)
    }

    /// The JSON text, if this input is JSON text.
    pub fn as_json(&self) -> Option<&str> {
        match self {
            Input::Json(text) => Some(text),
            _ => None,
        }
    }
}

/// A host string is JSON text.
impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Json(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Json(text)
    }
}

impl From<RawValue> for Input {
    fn from(raw: RawValue) -> Self {
        Input::Native(raw)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Value(value)
    }
}

impl From<()> for Input {
    fn from(_: ()) -> Self {
        Input::null()
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Native(RawValue::Int(value))
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Input::Native(RawValue::from(value))
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Native(RawValue::Bool(value))
    }
}
