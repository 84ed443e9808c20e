//! Declarative schema builder
//!
//! Two primitives build every schema:
//! - `key`: declare (or replace) a named field of a mapping
//! - `value`: declare the element type of a sequence
//!
//! Nested structure is declared in a block, mirroring the shape of the data:
//!
//! ```ignore
//! let schema = SchemaBuilder::mapping("orders")
//!     .key_with("items", Kind::Sequence, FieldOptions::required(), |b| {
//!         b.value_with(Kind::Mapping, FieldOptions::required(), |b| {
//!             b.key("sku", Kind::String, FieldOptions::required().format("^[A-Z]{3}-\\d+$"))
//!              .key("qty", Kind::Integer, FieldOptions::required())
//!         })
//!     })
//!     .build()?;
//! ```
//!
//! Declarations never fail on the spot. The first configuration problem is
//! kept and returned by `build()`.

use std::sync::Arc;

use regex::Regex;

use super::errors::{SchemaError, SchemaResult};
use super::types::{CustomCheck, FieldType, Kind, Schema, SchemaNode, Shape};
use super::validator::CheckContext;
use crate::observability::{self, Event};

/// Options of a field or element declaration.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    pub required: bool,
    pub format: Option<String>,
    pub check: Option<CustomCheck>,
}

impl FieldOptions {
    /// Key must be present (and not null).
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Key may be absent. This is the default.
    pub fn optional() -> Self {
        Self::default()
    }

    /// Text form of the value must match `pattern` (unanchored).
    pub fn format(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    /// Attach a custom check.
    pub fn check<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut CheckContext<'_>) + Send + Sync + 'static,
    {
        self.check = Some(CustomCheck::new(name, func));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Mapping,
    Sequence,
}

/// Builds one immutable [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    name: Option<String>,
    /// Dotted declaration path, for error messages
    scope: String,
    form: Form,
    fields: Vec<SchemaNode>,
    element: Option<SchemaNode>,
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    /// Start a mapping schema.
    pub fn mapping(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::start(Some(name.clone()), name, Form::Mapping)
    }

    /// Start a sequence schema; declare its element type with `value`.
    pub fn sequence(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::start(Some(name.clone()), name, Form::Sequence)
    }

    fn start(name: Option<String>, scope: String, form: Form) -> Self {
        Self {
            name,
            scope,
            form,
            fields: Vec::new(),
            element: None,
            error: None,
        }
    }

    fn nested(scope: String, form: Form) -> Self {
        Self::start(None, scope, form)
    }

    /// Declare a scalar or compound field.
    pub fn key(self, name: impl Into<String>, kind: Kind, options: FieldOptions) -> Self {
        self.declare_key(name.into(), kind, options, None::<fn(SchemaBuilder) -> SchemaBuilder>)
    }

    /// Declare a mapping or sequence field with its nested block.
    pub fn key_with<F>(
        self,
        name: impl Into<String>,
        kind: Kind,
        options: FieldOptions,
        block: F,
    ) -> Self
    where
        F: FnOnce(SchemaBuilder) -> SchemaBuilder,
    {
        self.declare_key(name.into(), kind, options, Some(block))
    }

    /// Declare the element type of a sequence.
    pub fn value(self, kind: Kind, options: FieldOptions) -> Self {
        self.declare_value(kind, options, None::<fn(SchemaBuilder) -> SchemaBuilder>)
    }

    /// Declare a mapping or sequence element type with its nested block.
    pub fn value_with<F>(self, kind: Kind, options: FieldOptions, block: F) -> Self
    where
        F: FnOnce(SchemaBuilder) -> SchemaBuilder,
    {
        self.declare_value(kind, options, Some(block))
    }

    fn declare_key<F>(
        mut self,
        name: String,
        kind: Kind,
        options: FieldOptions,
        block: Option<F>,
    ) -> Self
    where
        F: FnOnce(SchemaBuilder) -> SchemaBuilder,
    {
        if self.error.is_some() {
            return self;
        }
        if name.is_empty() {
            self.error = Some(SchemaError::EmptyFieldName {
                scope: self.scope.clone(),
            });
            return self;
        }
        if self.form == Form::Sequence {
            self.error = Some(SchemaError::KeyInSequence {
                scope: self.scope.clone(),
                field: name,
            });
            return self;
        }

        let label = self.child_label(&name);
        match make_node(label, Some(name.clone()), kind, options, block) {
            Ok(node) => {
                // Redeclaring a name replaces the rule in place
                match self.fields.iter_mut().find(|f| f.name() == Some(name.as_str())) {
                    Some(existing) => *existing = node,
                    None => self.fields.push(node),
                }
            }
            Err(e) => self.error = Some(e),
        }
        self
    }

    fn declare_value<F>(mut self, kind: Kind, options: FieldOptions, block: Option<F>) -> Self
    where
        F: FnOnce(SchemaBuilder) -> SchemaBuilder,
    {
        if self.error.is_some() {
            return self;
        }
        if self.form == Form::Mapping {
            self.error = Some(SchemaError::ValueInMapping {
                scope: self.scope.clone(),
            });
            return self;
        }

        let label = format!("{}[]", self.scope);
        match make_node(label, None, kind, options, block) {
            Ok(node) => self.element = Some(node),
            Err(e) => self.error = Some(e),
        }
        self
    }

    fn child_label(&self, name: &str) -> String {
        if self.scope.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.scope, name)
        }
    }

    fn finish(self) -> SchemaResult<(Option<String>, Shape)> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let shape = match self.form {
            Form::Mapping => Shape::Mapping(self.fields),
            Form::Sequence => match self.element {
                Some(element) => Shape::Sequence(Box::new(element)),
                None => return Err(SchemaError::MissingElementType { scope: self.scope }),
            },
        };
        Ok((self.name, shape))
    }

    /// Finish the schema.
    pub fn build(self) -> SchemaResult<Schema> {
        let scope = self.scope.clone();
        match self.finish() {
            Ok((name, shape)) => {
                let schema = Schema { name, shape };
                let fields = schema.fields().len().to_string();
                observability::emit(
                    Event::SchemaBuilt,
                    &[("schema", schema.label()), ("fields", fields.as_str())],
                );
                Ok(schema)
            }
            Err(e) => {
                let reason = e.to_string();
                observability::emit(
                    Event::SchemaRejected,
                    &[("schema", scope.as_str()), ("reason", reason.as_str())],
                );
                Err(e)
            }
        }
    }

    /// Finish the schema and wrap it for sharing.
    pub fn build_shared(self) -> SchemaResult<Arc<Schema>> {
        self.build().map(Arc::new)
    }
}

fn make_node<F>(
    label: String,
    name: Option<String>,
    kind: Kind,
    options: FieldOptions,
    block: Option<F>,
) -> SchemaResult<SchemaNode>
where
    F: FnOnce(SchemaBuilder) -> SchemaBuilder,
{
    let FieldOptions {
        required,
        format,
        check,
    } = options;

    let field_type = match (kind, block) {
        (Kind::Mapping, Some(block)) => {
            let (_, shape) = block(SchemaBuilder::nested(label.clone(), Form::Mapping)).finish()?;
            FieldType::Mapping(Arc::new(Schema { name: None, shape }))
        }
        (Kind::Sequence, Some(block)) => {
            match block(SchemaBuilder::nested(label.clone(), Form::Sequence)).finish()? {
                (_, Shape::Sequence(element)) => FieldType::Sequence(element),
                (_, Shape::Mapping(_)) => {
                    return Err(SchemaError::MissingElementType { scope: label })
                }
            }
        }
        (Kind::Mapping, None) => {
            return Err(SchemaError::MissingBlock {
                field: label,
                kind: "object",
            })
        }
        (Kind::Sequence, None) => {
            return Err(SchemaError::MissingBlock {
                field: label,
                kind: "array",
            })
        }
        (kind, Some(_)) => {
            return Err(SchemaError::UnexpectedBlock {
                field: label,
                kind: kind_name(&kind),
            })
        }
        (Kind::Integer, None) => FieldType::Integer,
        (Kind::Float, None) => FieldType::Float,
        (Kind::String, None) => FieldType::String,
        (Kind::Boolean, None) => FieldType::Boolean,
        (Kind::Schema(schema), None) => FieldType::Compound(schema),
    };

    let format = match format {
        Some(_) if !field_type.is_scalar() => {
            return Err(SchemaError::FormatOnStructuredType {
                field: label,
                kind: field_type.type_name(),
            })
        }
        Some(pattern) => match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(source) => {
                return Err(SchemaError::InvalidPattern {
                    field: label,
                    pattern,
                    source,
                })
            }
        },
        None => None,
    };

    Ok(SchemaNode {
        name,
        field_type,
        required,
        format,
        check,
    })
}

fn kind_name(kind: &Kind) -> &'static str {
    match kind {
        Kind::Integer => "integer",
        Kind::Float => "float",
        Kind::String => "string",
        Kind::Boolean => "boolean",
        Kind::Mapping => "object",
        Kind::Sequence => "array",
        Kind::Schema(_) => "compound schema",
    }
}
