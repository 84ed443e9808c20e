//! Chained lookups into a normalized document.
//!
//! `doc[Key::sym("bepa")][Key::sym("cepa")]` and `doc["bepa"]["cepa"]`
//! resolve the same value: every step returns a [`Field`], which indexes
//! with text keys, symbol keys and sequence positions alike.

use std::fmt;
use std::ops::{Deref, Index};

use serde_json::Value;

use crate::value::Key;

static NULL: Value = Value::Null;

/// One step of a lookup: a key into a mapping or a position in a sequence.
pub trait Lookup {
    /// The addressed child of `value`, if `value` has one.
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value>;
}

impl Lookup for usize {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_array().and_then(|items| items.get(*self))
    }
}

impl Lookup for str {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_object().and_then(|obj| obj.get(self))
    }
}

impl Lookup for String {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().lookup(value)
    }
}

impl Lookup for Key {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.canonical().lookup(value)
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).lookup(value)
    }
}

/// A read-only view of a value inside a normalized document.
///
/// Missing keys, out-of-range positions and lookups into scalars all give
/// a `null` field, so chains never panic. Derefs to the underlying
/// `serde_json::Value`.
#[repr(transparent)]
pub struct Field(Value);

impl Field {
    pub fn new(value: &Value) -> &Field {
        // SAFETY: `Field` is `repr(transparent)` over `Value`, so both
        // references have the same layout and lifetime.
        unsafe { &*(value as *const Value as *const Field) }
    }

    /// The `null` field returned for absent values.
    pub fn null() -> &'static Field {
        Field::new(&NULL)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The addressed child, or the `null` field.
    pub fn at<I: Lookup>(&self, step: I) -> &Field {
        step.lookup(&self.0).map_or(Field::null(), Field::new)
    }
}

impl Deref for Field {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl<I: Lookup> Index<I> for Field {
    type Output = Field;

    fn index(&self, step: I) -> &Field {
        self.at(step)
    }
}

impl<T> PartialEq<T> for Field
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &T) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbol_and_text_chain_agree() {
        let doc = json!({"bepa": {"cepa": 3}});
        let field = Field::new(&doc);

        assert_eq!(field[Key::sym("bepa")][Key::sym("cepa")], 3);
        assert_eq!(field["bepa"][Key::text("cepa")], 3);
        assert_eq!(field[String::from("bepa")]["cepa"], 3);
    }

    #[test]
    fn test_sequence_positions() {
        let doc = json!({"apa": {"bepa": [3, 5, 10]}});
        let field = Field::new(&doc);

        assert_eq!(field["apa"]["bepa"][2], 10);
        assert!(field["apa"]["bepa"][3].is_null());
    }

    #[test]
    fn test_missing_steps_are_null() {
        let doc = json!({"apa": 1});
        let field = Field::new(&doc);

        assert!(field["bepa"]["cepa"][0].is_null());
        assert!(field["apa"]["cepa"].is_null());
        assert!(field[0].is_null());
    }

    #[test]
    fn test_compares_with_values() {
        let doc = json!({"apa": "x"});
        assert_eq!(Field::new(&doc)["apa"], "x");
        assert_eq!(Field::new(&doc)["apa"], json!("x"));
        assert_eq!(Field::new(&doc).as_value(), &doc);
    }
}
