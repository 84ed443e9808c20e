//! Recursive structural validator
//!
//! Validation semantics:
//! - All required fields are present (a `null` value counts as absent)
//! - No undeclared fields exist, at any nesting level
//! - Field kinds match their declared type; no coercion
//! - Scalar fields with a format match it
//! - Every element of a sequence satisfies the element rule
//! - Custom checks run once the field's kind matched
//!
//! Reporting:
//! - Every violation is collected; siblings are always checked
//! - A branch of the wrong kind is not descended into
//! - Nothing here panics on malformed input

use serde_json::{Map, Value};

use super::types::{FieldType, Schema, SchemaNode, Shape};
use crate::config::ValidatorConfig;
use crate::observability::{self, Event, MetricsRegistry, ObservationScope, Timer};
use crate::report::{ErrorCollector, FieldPath, PathSegment, ViolationKind};
use crate::value::kind_name;

/// What a custom check sees: the whole document, the mapping holding the
/// checked field, the checked value and its path, and the collector to
/// record into.
pub struct CheckContext<'a> {
    document: &'a Value,
    parent: Option<&'a Map<String, Value>>,
    value: &'a Value,
    path: &'a FieldPath,
    collector: &'a mut ErrorCollector,
}

impl<'a> CheckContext<'a> {
    /// The normalized document being validated.
    pub fn document(&self) -> &'a Value {
        self.document
    }

    /// The value of the field or element under check.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Path of the value under check.
    pub fn path(&self) -> &FieldPath {
        self.path
    }

    /// Looks up a top-level field of the document.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.document.as_object().and_then(|obj| obj.get(key))
    }

    /// The mapping the checked field belongs to. `None` for sequence
    /// elements.
    pub fn parent(&self) -> Option<&'a Map<String, Value>> {
        self.parent
    }

    /// Looks up a field next to the checked one, at any nesting level.
    pub fn sibling(&self, key: &str) -> Option<&'a Value> {
        self.parent.and_then(|obj| obj.get(key))
    }

    /// Record a failure at the checked value's path.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.collector.record(
            self.path.clone(),
            ViolationKind::CustomCheckFailure(message.into()),
        );
    }

    /// Record a failure below the checked value, e.g. at one of its keys.
    pub fn fail_at(&mut self, segment: impl Into<PathSegment>, message: impl Into<String>) {
        self.collector.record(
            self.path.child(segment),
            ViolationKind::CustomCheckFailure(message.into()),
        );
    }
}

/// Validates one normalized document against schemas.
///
/// Holds the document root so custom checks can read sibling fields.
/// Validation is deterministic and does not mutate the document.
pub struct Validator<'a> {
    config: &'a ValidatorConfig,
    document: &'a Value,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a ValidatorConfig, document: &'a Value) -> Self {
        Self { config, document }
    }

    /// Runs one full pass over the document and returns its report.
    pub fn run(&self, schema: &Schema) -> ErrorCollector {
        let scope = ObservationScope::with_fields(
            Event::ValidationBegin,
            Event::ValidationComplete,
            &[("schema", schema.label())],
            self.config.log_passes,
        );
        let timer = Timer::new();

        let mut collector = ErrorCollector::new();
        self.validate_schema(schema, self.document, &FieldPath::root(), 0, &mut collector);

        MetricsRegistry::global().record_pass(collector.len());
        let errors = collector.len().to_string();
        let valid = collector.is_empty().to_string();
        let elapsed = timer.elapsed_us();
        scope.complete_with_fields(&[
            ("errors", errors.as_str()),
            ("valid", valid.as_str()),
            ("elapsed_us", elapsed.as_str()),
        ]);

        collector
    }

    /// Validates `value` against `schema`, recording under `path`.
    ///
    /// `path` only labels violations; depth is counted from `value`.
    pub fn validate(
        &self,
        schema: &Schema,
        value: &Value,
        path: &FieldPath,
        collector: &mut ErrorCollector,
    ) {
        self.validate_schema(schema, value, path, 0, collector);
    }

    fn validate_schema(
        &self,
        schema: &Schema,
        value: &Value,
        path: &FieldPath,
        depth: usize,
        collector: &mut ErrorCollector,
    ) {
        match &schema.shape {
            Shape::Mapping(fields) => match value {
                Value::Object(obj) => {
                    if self.enter(path, depth, collector) {
                        self.validate_object(obj, fields, path, depth + 1, collector);
                    }
                }
                other => collector.record(
                    path.clone(),
                    ViolationKind::NotAMapping {
                        actual: kind_name(other),
                    },
                ),
            },
            Shape::Sequence(element) => match value {
                Value::Array(items) => {
                    if self.enter(path, depth, collector) {
                        self.validate_elements(items, element, path, depth + 1, collector);
                    }
                }
                other => collector.record(
                    path.clone(),
                    ViolationKind::NotASequence {
                        actual: kind_name(other),
                    },
                ),
            },
        }
    }

    /// Depth gate for entering a container at `path`.
    fn enter(&self, path: &FieldPath, depth: usize, collector: &mut ErrorCollector) -> bool {
        if depth < self.config.max_depth {
            return true;
        }

        let limit = self.config.max_depth;
        collector.record(path.clone(), ViolationKind::DepthLimitExceeded { limit });
        let rendered = path.to_string();
        let limit_str = limit.to_string();
        observability::emit(
            Event::DepthLimitExceeded,
            &[("path", rendered.as_str()), ("limit", limit_str.as_str())],
        );
        false
    }

    /// Validates an object against field definitions.
    fn validate_object(
        &self,
        obj: &Map<String, Value>,
        fields: &[SchemaNode],
        path: &FieldPath,
        depth: usize,
        collector: &mut ErrorCollector,
    ) {
        // Closed schema: undeclared keys are violations
        for key in obj.keys() {
            if !fields.iter().any(|f| f.name() == Some(key.as_str())) {
                collector.record(path.child(key.as_str()), ViolationKind::UnexpectedField);
            }
        }

        for field in fields {
            let Some(name) = field.name() else {
                continue;
            };
            let field_path = path.child(name);

            match obj.get(name) {
                None | Some(Value::Null) => {
                    if field.required {
                        collector.record(field_path, ViolationKind::MissingRequiredField);
                    }
                }
                Some(value) => {
                    self.validate_node(field, value, Some(obj), &field_path, depth, collector)
                }
            }
        }
    }

    fn validate_elements(
        &self,
        items: &[Value],
        element: &SchemaNode,
        path: &FieldPath,
        depth: usize,
        collector: &mut ErrorCollector,
    ) {
        for (i, item) in items.iter().enumerate() {
            let item_path = path.child(i);
            if item.is_null() {
                if element.required {
                    collector.record(item_path, ViolationKind::MissingRequiredField);
                }
                continue;
            }
            self.validate_node(element, item, None, &item_path, depth, collector);
        }
    }

    /// Validates a present, non-null value against one rule.
    fn validate_node(
        &self,
        node: &SchemaNode,
        value: &Value,
        parent: Option<&Map<String, Value>>,
        path: &FieldPath,
        depth: usize,
        collector: &mut ErrorCollector,
    ) {
        if let Some(kind) = kind_violation(&node.field_type, value) {
            collector.record(path.clone(), kind);
            return;
        }

        match &node.field_type {
            FieldType::Integer | FieldType::Float | FieldType::String | FieldType::Boolean => {
                if let Some(format) = &node.format {
                    let text = text_form(value);
                    if !format.is_match(&text) {
                        collector.record(
                            path.clone(),
                            ViolationKind::FormatMismatch {
                                pattern: format.as_str().to_string(),
                            },
                        );
                    }
                }
            }
            FieldType::Mapping(schema) | FieldType::Compound(schema) => {
                self.validate_schema(schema, value, path, depth, collector);
            }
            FieldType::Sequence(element) => {
                if let Value::Array(items) = value {
                    if self.enter(path, depth, collector) {
                        self.validate_elements(items, element, path, depth + 1, collector);
                    }
                }
            }
        }

        if let Some(check) = &node.check {
            let mut ctx = CheckContext {
                document: self.document,
                parent,
                value,
                path,
                collector,
            };
            check.call(&mut ctx);
        }
    }
}

/// Returns the violation for a value of the wrong kind, if any.
fn kind_violation(field_type: &FieldType, value: &Value) -> Option<ViolationKind> {
    let actual = kind_name(value);
    let matches = match field_type {
        FieldType::Integer => value.is_i64() || value.is_u64(),
        FieldType::Float => value.is_number(),
        FieldType::String => value.is_string(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Mapping(_) => {
            return (!value.is_object()).then_some(ViolationKind::NotAMapping { actual })
        }
        FieldType::Sequence(_) => {
            return (!value.is_array()).then_some(ViolationKind::NotASequence { actual })
        }
        FieldType::Compound(schema) => {
            return match schema.shape() {
                Shape::Mapping(_) if !value.is_object() => {
                    Some(ViolationKind::NotAMapping { actual })
                }
                Shape::Sequence(_) if !value.is_array() => {
                    Some(ViolationKind::NotASequence { actual })
                }
                _ => None,
            }
        }
    };

    (!matches).then_some(ViolationKind::TypeMismatch {
        expected: field_type.type_name(),
        actual,
    })
}

/// Text form of a scalar, as matched by a format.
fn text_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validates `value` against `schema` with the default configuration,
/// recording into `collector` under `path`.
pub fn validate(schema: &Schema, value: &Value, path: &FieldPath, collector: &mut ErrorCollector) {
    let config = ValidatorConfig::default();
    Validator::new(&config, value).validate(schema, value, path, collector);
}
