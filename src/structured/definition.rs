//! Named schema definitions and the typed documents built on them.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use super::document::StructuredValue;
use super::validatable::Validatable;
use crate::report::ErrorCollector;
use crate::value::Input;

/// A type that names one process-wide schema.
///
/// ```ignore
/// struct Order;
///
/// impl Definition for Order {
///     fn schema() -> Arc<Schema> {
///         static SCHEMA: OnceLock<Arc<Schema>> = OnceLock::new();
///         SCHEMA
///             .get_or_init(|| {
///                 SchemaBuilder::mapping("Order")
///                     .key("id", Kind::Integer, FieldOptions::required())
///                     .build_shared()
///                     .expect("Order schema")
///             })
///             .clone()
///     }
/// }
///
/// let order = Structured::<Order>::new(r#"{"id": 7}"#);
/// ```
pub trait Definition {
    fn schema() -> Arc<crate::schema::Schema>;
}

/// A document validated against `D`'s schema.
pub struct Structured<D: Definition> {
    inner: StructuredValue,
    _definition: PhantomData<fn() -> D>,
}

impl<D: Definition> Structured<D> {
    pub fn new(input: impl Into<Input>) -> Self {
        Self {
            inner: StructuredValue::new(D::schema(), input),
            _definition: PhantomData,
        }
    }

    pub fn into_inner(self) -> StructuredValue {
        self.inner
    }
}

impl<D: Definition> Deref for Structured<D> {
    type Target = StructuredValue;

    fn deref(&self) -> &StructuredValue {
        &self.inner
    }
}

impl<D: Definition> Validatable for Structured<D> {
    fn errors(&self) -> &ErrorCollector {
        self.inner.errors()
    }
}

impl<D: Definition> fmt::Debug for Structured<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Structured").field(&self.inner).finish()
    }
}
