//! Mapping keys and their canonical form.

use std::borrow::Cow;
use std::fmt;

/// A key as the caller spelled it.
///
/// `Key::Text("apa")` and `Key::Symbol("apa")` name the same field: both
/// canonicalise to the string `"apa"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Text(String),
    Symbol(Cow<'static, str>),
}

impl Key {
    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    /// A symbol key, typically a `'static` literal.
    pub fn sym(name: impl Into<Cow<'static, str>>) -> Self {
        Key::Symbol(name.into())
    }

    /// The canonical string this key collapses to.
    pub fn canonical(&self) -> &str {
        match self {
            Key::Text(name) => name,
            Key::Symbol(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(name) => write!(f, "{:?}", name),
            Key::Symbol(name) => write!(f, ":{}", name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Text(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Text(name)
    }
}

/// Anything usable to look up a field: text or symbol spelling.
pub trait FieldKey {
    fn canonical_key(&self) -> &str;
}

impl FieldKey for str {
    fn canonical_key(&self) -> &str {
        self
    }
}

impl FieldKey for String {
    fn canonical_key(&self) -> &str {
        self
    }
}

impl FieldKey for Key {
    fn canonical_key(&self) -> &str {
        self.canonical()
    }
}

impl<K: FieldKey + ?Sized> FieldKey for &K {
    fn canonical_key(&self) -> &str {
        (**self).canonical_key()
    }
}
