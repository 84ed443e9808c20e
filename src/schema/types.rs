//! Schema type definitions
//!
//! Supported field types:
//! - integer: integral JSON number
//! - float: any JSON number
//! - string: UTF-8 string
//! - boolean
//! - mapping: nested object with an inline keyed schema
//! - sequence: homogeneous array with one element rule
//! - compound: another named schema, shared by reference

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::validator::CheckContext;

/// Signature of a custom check.
pub type CheckFn = dyn Fn(&mut CheckContext<'_>) + Send + Sync;

/// A named custom check attached to a field or element rule.
///
/// Runs after the rule's own type and format checks whenever the value's
/// kind matched, and may record any number of violations.
#[derive(Clone)]
pub struct CustomCheck {
    name: String,
    func: Arc<CheckFn>,
}

impl CustomCheck {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut CheckContext<'_>) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn call(&self, ctx: &mut CheckContext<'_>) {
        (self.func)(ctx)
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCheck").field("name", &self.name).finish()
    }
}

/// Declared type of a field, as passed to the builder.
#[derive(Debug, Clone)]
pub enum Kind {
    Integer,
    Float,
    String,
    Boolean,
    /// Nested object; the declaration block defines its fields
    Mapping,
    /// Array; the declaration block declares its element type
    Sequence,
    /// A previously built schema, validated wholesale
    Schema(Arc<Schema>),
}

/// Resolved type of a rule, carrying its child schema where it has one.
#[derive(Debug, Clone)]
pub enum FieldType {
    Integer,
    Float,
    String,
    Boolean,
    /// Inline nested object
    Mapping(Arc<Schema>),
    /// Homogeneous array; one rule for every element
    Sequence(Box<SchemaNode>),
    /// Reference to a named schema
    Compound(Arc<Schema>),
}

impl FieldType {
    /// Returns the type name for violation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::Mapping(_) => "object",
            FieldType::Sequence(_) => "array",
            FieldType::Compound(schema) => match schema.shape() {
                Shape::Mapping(_) => "object",
                Shape::Sequence(_) => "array",
            },
        }
    }

    /// Scalar types are the only ones a format may apply to.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldType::Integer | FieldType::Float | FieldType::String | FieldType::Boolean
        )
    }
}

/// One declarative rule: a field of a mapping or the element of a sequence.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    /// `None` for a sequence element rule
    pub(crate) name: Option<String>,
    pub(crate) field_type: FieldType,
    pub(crate) required: bool,
    pub(crate) format: Option<Regex>,
    pub(crate) check: Option<CustomCheck>,
}

impl SchemaNode {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn format(&self) -> Option<&Regex> {
        self.format.as_ref()
    }

    pub fn check(&self) -> Option<&CustomCheck> {
        self.check.as_ref()
    }
}

/// Shape of a schema.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Named fields in declaration order, unique by name
    Mapping(Vec<SchemaNode>),
    /// One rule every element must satisfy
    Sequence(Box<SchemaNode>),
}

/// An immutable, shareable schema. Build one with
/// [`SchemaBuilder`](super::SchemaBuilder).
#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) name: Option<String>,
    pub(crate) shape: Shape,
}

impl Schema {
    /// Schema name, used in log events
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Declared fields; empty for a sequence schema
    pub fn fields(&self) -> &[SchemaNode] {
        match &self.shape {
            Shape::Mapping(fields) => fields,
            Shape::Sequence(_) => &[],
        }
    }

    /// Looks up a declared field by name
    pub fn field(&self, name: &str) -> Option<&SchemaNode> {
        self.fields().iter().find(|f| f.name() == Some(name))
    }

    /// Element rule of a sequence schema
    pub fn element(&self) -> Option<&SchemaNode> {
        match &self.shape {
            Shape::Sequence(node) => Some(node),
            Shape::Mapping(_) => None,
        }
    }

    /// Names of the required fields, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields()
            .iter()
            .filter(|f| f.required)
            .filter_map(|f| f.name())
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, field_type: FieldType, required: bool) -> SchemaNode {
        SchemaNode {
            name: Some(name.into()),
            field_type,
            required,
            format: None,
            check: None,
        }
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Integer.type_name(), "integer");
        assert_eq!(FieldType::Float.type_name(), "float");
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Boolean.type_name(), "boolean");

        let inner = Arc::new(Schema {
            name: None,
            shape: Shape::Mapping(Vec::new()),
        });
        assert_eq!(FieldType::Mapping(inner.clone()).type_name(), "object");
        assert_eq!(FieldType::Compound(inner).type_name(), "object");

        let element = SchemaNode {
            name: None,
            field_type: FieldType::Integer,
            required: false,
            format: None,
            check: None,
        };
        assert_eq!(FieldType::Sequence(Box::new(element)).type_name(), "array");
    }

    #[test]
    fn test_field_lookup_and_required() {
        let schema = Schema {
            name: Some("users".into()),
            shape: Shape::Mapping(vec![
                node("name", FieldType::String, true),
                node("age", FieldType::Integer, false),
            ]),
        };

        assert!(schema.field("age").is_some());
        assert!(schema.field("missing").is_none());
        assert!(schema.element().is_none());
        assert_eq!(schema.required_fields().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_custom_check_debug_shows_name() {
        let check = CustomCheck::new("validate_odd", |_ctx| {});
        assert!(format!("{:?}", check).contains("validate_odd"));
    }
}
