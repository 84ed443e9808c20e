//! The "supports validation" convention shared by validatable values.

use super::document::StructuredValue;
use crate::report::{ErrorCollector, FieldPath};

/// Anything that can report validity and a path-keyed error listing.
pub trait Validatable {
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    fn errors(&self) -> &ErrorCollector;
}

impl Validatable for StructuredValue {
    fn errors(&self) -> &ErrorCollector {
        StructuredValue::errors(self)
    }
}

/// True when every item is valid. Every item is validated.
pub fn validate_all(items: &[&dyn Validatable]) -> bool {
    items
        .iter()
        .map(|item| item.is_valid())
        .fold(true, |all, valid| all && valid)
}

/// One report for several named parts, each part's violations under its
/// name.
pub fn merge_reports<'a, I>(parts: I) -> ErrorCollector
where
    I: IntoIterator<Item = (&'a str, &'a dyn Validatable)>,
{
    let mut merged = ErrorCollector::new();
    for (name, part) in parts {
        merged.merge(part.errors().clone(), &FieldPath::root().child(name));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldOptions, Kind, SchemaBuilder};
    use serde_json::json;
    use std::sync::Arc;

    fn simple() -> Arc<crate::schema::Schema> {
        SchemaBuilder::mapping("MySimpleHash")
            .key("apa", Kind::Integer, FieldOptions::required())
            .build_shared()
            .unwrap()
    }

    #[test]
    fn test_trait_object_matches_inherent() {
        let doc = StructuredValue::new(simple(), json!({"apa": 1}));
        let as_trait: &dyn Validatable = &doc;
        assert_eq!(as_trait.is_valid(), doc.is_valid());
    }

    #[test]
    fn test_validate_all() {
        let good = StructuredValue::new(simple(), json!({"apa": 1}));
        let bad = StructuredValue::new(simple(), json!({"apa": "x"}));

        assert!(validate_all(&[&good, &good]));
        assert!(!validate_all(&[&good, &bad]));
        assert!(validate_all(&[]));
    }

    #[test]
    fn test_merge_reports_prefixes_each_part() {
        let billing = StructuredValue::new(simple(), json!({}));
        let shipping = StructuredValue::new(simple(), json!({"apa": 1, "x": 0}));

        let report = merge_reports([
            ("billing", &billing as &dyn Validatable),
            ("shipping", &shipping as &dyn Validatable),
        ]);
        assert_eq!(
            report.full_messages(),
            vec!["billing.apa is required", "shipping.x is not a declared field"]
        );
    }
}
