//! One document bound to one schema.

use std::ops::Index;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use super::field::{Field, Lookup};
use crate::config::ValidatorConfig;
use crate::report::ErrorCollector;
use crate::schema::{Schema, Validator};
use crate::value::{normalize, FieldKey, Input};

/// A document bound to a schema.
///
/// Keeps the caller's input untouched next to its normalized view. The
/// report is computed on first use and memoized; input and schema never
/// change afterwards, so the instance can be shared across threads.
#[derive(Debug)]
pub struct StructuredValue {
    schema: Arc<Schema>,
    raw: Input,
    normalized: Value,
    config: ValidatorConfig,
    report: OnceLock<ErrorCollector>,
}

impl StructuredValue {
    pub fn new(schema: Arc<Schema>, input: impl Into<Input>) -> Self {
        Self::with_config(schema, input, ValidatorConfig::default())
    }

    pub fn with_config(
        schema: Arc<Schema>,
        input: impl Into<Input>,
        config: ValidatorConfig,
    ) -> Self {
        let raw = input.into();
        let normalized = normalize(&raw);
        Self {
            schema,
            raw,
            normalized,
            config,
            report: OnceLock::new(),
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The input exactly as supplied: JSON text stays text.
    pub fn raw(&self) -> &Input {
        &self.raw
    }

    /// The normalized view, with canonical string keys.
    pub fn normalized(&self) -> &Value {
        &self.normalized
    }

    /// The whole document as a chainable [`Field`].
    pub fn root(&self) -> &Field {
        Field::new(&self.normalized)
    }

    /// Looks up a top-level field by text or symbol key.
    ///
    /// `None` when the key is absent or the document is not an object.
    pub fn get<K: FieldKey + ?Sized>(&self, key: &K) -> Option<&Value> {
        self.normalized
            .as_object()
            .and_then(|obj| obj.get(key.canonical_key()))
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The validation report, computed at most once.
    pub fn errors(&self) -> &ErrorCollector {
        self.report
            .get_or_init(|| Validator::new(&self.config, &self.normalized).run(&self.schema))
    }
}

/// `doc[Key::sym("bepa")][Key::sym("cepa")]`: each step takes either key
/// spelling or a position; anything missing indexes to a `null` field.
impl<I: Lookup> Index<I> for StructuredValue {
    type Output = Field;

    fn index(&self, step: I) -> &Field {
        self.root().at(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldOptions, Kind, SchemaBuilder};
    use crate::value::{Key, RawValue};
    use serde_json::json;

    fn simple() -> Arc<Schema> {
        SchemaBuilder::mapping("MySimpleHash")
            .key("apa", Kind::Integer, FieldOptions::required())
            .build_shared()
            .unwrap()
    }

    #[test]
    fn test_raw_is_untouched() {
        let json_text = r#"{"apa": 1}"#;
        let doc = StructuredValue::new(simple(), json_text);
        assert_eq!(doc.raw(), &Input::Json(json_text.to_string()));

        let native = RawValue::map([(Key::sym("apa"), 1)]);
        let doc = StructuredValue::new(simple(), native.clone());
        assert_eq!(doc.raw(), &Input::Native(native));
    }

    #[test]
    fn test_text_and_symbol_lookup_agree() {
        let doc = StructuredValue::new(simple(), RawValue::map([(Key::sym("apa"), 1)]));
        assert_eq!(doc["apa"], 1);
        assert_eq!(doc[Key::sym("apa")], 1);
        assert_eq!(doc.get("apa"), doc.get(&Key::sym("apa")));
        assert_eq!(doc.get(&String::from("apa")), Some(&json!(1)));
    }

    #[test]
    fn test_symbol_keys_chain_through_nesting() {
        let schema = SchemaBuilder::mapping("MyStructuredHash")
            .key_with("bepa", Kind::Mapping, FieldOptions::required(), |b| {
                b.key("cepa", Kind::Integer, FieldOptions::required())
            })
            .build_shared()
            .unwrap();
        let doc = StructuredValue::new(
            schema,
            RawValue::map([(Key::sym("bepa"), RawValue::map([(Key::text("cepa"), 3)]))]),
        );

        assert_eq!(doc[Key::sym("bepa")][Key::sym("cepa")], 3);
        assert_eq!(doc["bepa"][Key::sym("cepa")], 3);
        assert_eq!(doc[Key::sym("bepa")]["cepa"], 3);
    }

    #[test]
    fn test_missing_key_is_null() {
        let doc = StructuredValue::new(simple(), json!({"apa": 1}));
        assert!(doc.get("bepa").is_none());
        assert!(doc["bepa"].is_null());
        assert!(doc["bepa"]["cepa"].is_null());
    }

    #[test]
    fn test_lookup_on_non_object_is_graceful() {
        let doc = StructuredValue::new(simple(), 3);
        assert!(doc.get("apa").is_none());
        assert!(doc["apa"].is_null());
        assert!(!doc.is_valid());
    }

    #[test]
    fn test_report_memoized() {
        let doc = StructuredValue::new(simple(), json!({"apa": 1, "bepa": 2}));
        let first = doc.errors() as *const ErrorCollector;
        let second = doc.errors() as *const ErrorCollector;
        assert_eq!(first, second);
        assert!(!doc.is_valid());
    }

    #[test]
    fn test_config_reaches_validator() {
        let schema = SchemaBuilder::mapping("deep")
            .key_with("a", Kind::Mapping, FieldOptions::required(), |b| {
                b.key("b", Kind::Integer, FieldOptions::required())
            })
            .build_shared()
            .unwrap();

        let doc = StructuredValue::with_config(
            schema,
            json!({"a": {"b": 1}}),
            ValidatorConfig::default().with_max_depth(1),
        );
        assert_eq!(doc.errors().full_messages(), vec!["a exceeds the maximum nesting depth of 1"]);
    }

    #[test]
    fn test_shared_across_threads() {
        let doc = Arc::new(StructuredValue::new(simple(), json!({"apa": 1})));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let doc = Arc::clone(&doc);
                std::thread::spawn(move || doc.is_valid())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
