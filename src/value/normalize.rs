//! Input normalization.
//!
//! Produces a `serde_json::Value` tree with canonical string keys. Never
//! fails: shape problems are left for the validator to report.

use serde_json::{Map, Number, Value};

use super::input::{Input, RawValue};
use crate::observability::{self, Event, MetricsRegistry};

/// Normalize caller input into a JSON tree.
///
/// Malformed JSON text becomes `Null`, so validation reports a single
/// "expected an object" at the root.
pub fn normalize(input: &Input) -> Value {
    match input {
        Input::Json(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(e) => {
                MetricsRegistry::global().record_parse_failure();
                let line = e.line().to_string();
                let column = e.column().to_string();
                let reason = e.to_string();
                observability::emit(
                    Event::JsonParseFailed,
                    &[
                        ("line", line.as_str()),
                        ("column", column.as_str()),
                        ("reason", reason.as_str()),
                    ],
                );
                Value::Null
            }
        },
        Input::Native(raw) => normalize_raw(raw),
        Input::Value(value) => value.clone(),
    }
}

/// Normalize a native value tree.
///
/// Keys collapse to their canonical string; when two spellings of one key
/// are present the later entry wins.
pub fn normalize_raw(raw: &RawValue) -> Value {
    match raw {
        RawValue::Null => Value::Null,
        RawValue::Bool(b) => Value::Bool(*b),
        RawValue::Int(i) => Value::Number(Number::from(*i)),
        // NaN and infinities have no JSON form
        RawValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        RawValue::Text(s) => Value::String(s.clone()),
        RawValue::Seq(items) => Value::Array(items.iter().map(normalize_raw).collect()),
        RawValue::Map(entries) => {
            let mut map = Map::new();
            for (key, value) in entries {
                map.insert(key.canonical().to_string(), normalize_raw(value));
            }
            Value::Object(map)
        }
    }
}

/// Type name of a normalized value, as used in violation messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Key;
    use serde_json::json;

    #[test]
    fn test_json_text_parsed() {
        let value = normalize(&Input::from(r#"{"apa": 1}"#));
        assert_eq!(value, json!({"apa": 1}));
    }

    #[test]
    fn test_malformed_json_becomes_null() {
        assert_eq!(normalize(&Input::from("{apa: ")), Value::Null);
        assert_eq!(normalize(&Input::from("")), Value::Null);
    }

    #[test]
    fn test_symbol_and_text_keys_collapse() {
        let raw = RawValue::map([
            (Key::sym("apa"), RawValue::Int(1)),
            (Key::text("bepa"), RawValue::map([(Key::sym("cepa"), 3)])),
        ]);
        assert_eq!(normalize_raw(&raw), json!({"apa": 1, "bepa": {"cepa": 3}}));
    }

    #[test]
    fn test_later_spelling_wins() {
        let raw = RawValue::map([(Key::text("apa"), 1), (Key::sym("apa"), 2)]);
        assert_eq!(normalize_raw(&raw), json!({"apa": 2}));
    }

    #[test]
    fn test_sequence_order_preserved() {
        let raw = RawValue::seq([RawValue::Int(3), RawValue::from("x"), RawValue::Null]);
        assert_eq!(normalize_raw(&raw), json!([3, "x", null]));
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(normalize_raw(&RawValue::Float(f64::NAN)), Value::Null);
        assert_eq!(normalize_raw(&RawValue::Float(1.5)), json!(1.5));
    }

    #[test]
    fn test_scalar_kept() {
        assert_eq!(normalize(&Input::from(3)), json!(3));
        assert_eq!(normalize(&Input::null()), Value::Null);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&json!(1)), "integer");
        assert_eq!(kind_name(&json!(1.5)), "float");
        assert_eq!(kind_name(&json!("x")), "string");
        assert_eq!(kind_name(&json!(null)), "null");
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
    }
}
