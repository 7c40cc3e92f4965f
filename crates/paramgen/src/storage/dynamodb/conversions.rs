//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting DynamoDB attribute maps into plain JSON.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine};
use paramgen_core::storage::{Item, RepositoryError, Result};
use serde_json::{Number, Value};

/// Convert a scanned DynamoDB item to a JSON object.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Result<Item> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_json(name, value)?)))
        .collect()
}

/// Convert one attribute value to JSON, recursing into lists and maps.
///
/// `name` is the top-level attribute the value belongs to and is only used
/// for error reporting.
pub fn attribute_to_json(name: &str, value: &AttributeValue) -> Result<Value> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => number_to_json(name, n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::B(blob) => Ok(blob_to_json(blob)),
        AttributeValue::L(list) => list
            .iter()
            .map(|value| attribute_to_json(name, value))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(key, value)| Ok((key.clone(), attribute_to_json(name, value)?)))
            .collect::<Result<serde_json::Map<_, _>>>()
            .map(Value::Object),
        AttributeValue::Ss(set) => Ok(Value::Array(
            set.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(set) => set
            .iter()
            .map(|n| number_to_json(name, n))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::Bs(set) => Ok(Value::Array(set.iter().map(blob_to_json).collect())),
        other => Err(RepositoryError::invalid_data(
            name,
            format!("unsupported attribute type: {other:?}"),
        )),
    }
}

/// DynamoDB numbers travel as strings. Integers stay exact when they fit in
/// 64 bits; everything else becomes a float.
fn number_to_json(name: &str, n: &str) -> Result<Value> {
    let n = n.trim();
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(i.into()));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(u.into()));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::invalid_data(name, format!("not a number: {n}")))
}

/// Binary values are emitted as standard base64 strings.
fn blob_to_json(blob: &Blob) -> Value {
    Value::String(STANDARD.encode(blob.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_string_attributes() {
        let result = item_to_json(&item(&[
            ("id", AttributeValue::S("1".to_string())),
            ("name", AttributeValue::S("x".to_string())),
        ]))
        .unwrap();

        assert_eq!(Value::Object(result), json!({"id": "1", "name": "x"}));
    }

    #[test]
    fn test_integer_number() {
        let value = attribute_to_json("n", &AttributeValue::N("42".to_string())).unwrap();
        assert_eq!(value, json!(42));
    }

    #[test]
    fn test_negative_number() {
        let value = attribute_to_json("n", &AttributeValue::N("-7".to_string())).unwrap();
        assert_eq!(value, json!(-7));
    }

    #[test]
    fn test_large_unsigned_number() {
        let value =
            attribute_to_json("n", &AttributeValue::N("18446744073709551615".to_string())).unwrap();
        assert_eq!(value, json!(u64::MAX));
    }

    #[test]
    fn test_float_number() {
        let value = attribute_to_json("n", &AttributeValue::N("3.25".to_string())).unwrap();
        assert_eq!(value, json!(3.25));
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = attribute_to_json("price", &AttributeValue::N("abc".to_string())).unwrap_err();
        assert_eq!(err, RepositoryError::invalid_data("price", "not a number: abc"));
    }

    #[test]
    fn test_bool_and_null() {
        assert_eq!(
            attribute_to_json("b", &AttributeValue::Bool(true)).unwrap(),
            json!(true)
        );
        assert_eq!(
            attribute_to_json("n", &AttributeValue::Null(true)).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_binary_is_base64() {
        let value = attribute_to_json("b", &AttributeValue::B(Blob::new(b"hello".to_vec()))).unwrap();
        assert_eq!(value, json!("aGVsbG8="));
    }

    #[test]
    fn test_sets() {
        assert_eq!(
            attribute_to_json(
                "ss",
                &AttributeValue::Ss(vec!["a".to_string(), "b".to_string()])
            )
            .unwrap(),
            json!(["a", "b"])
        );
        assert_eq!(
            attribute_to_json(
                "ns",
                &AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()])
            )
            .unwrap(),
            json!([1, 2.5])
        );
        assert_eq!(
            attribute_to_json("bs", &AttributeValue::Bs(vec![Blob::new(b"hi".to_vec())])).unwrap(),
            json!(["aGk="])
        );
    }

    #[test]
    fn test_nested_list_and_map() {
        let nested = AttributeValue::M(item(&[
            ("cluster", AttributeValue::S("prod".to_string())),
            (
                "replicas",
                AttributeValue::L(vec![
                    AttributeValue::N("1".to_string()),
                    AttributeValue::M(item(&[("enabled", AttributeValue::Bool(false))])),
                ]),
            ),
        ]));

        let result = item_to_json(&item(&[("config", nested)])).unwrap();

        assert_eq!(
            Value::Object(result),
            json!({"config": {"cluster": "prod", "replicas": [1, {"enabled": false}]}})
        );
    }

    #[test]
    fn test_nested_error_reports_top_level_attribute() {
        let nested = AttributeValue::L(vec![AttributeValue::N("not-a-number".to_string())]);

        let err = item_to_json(&item(&[("values", nested)])).unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::InvalidData { ref attribute, .. } if attribute == "values"
        ));
    }

    #[test]
    fn test_keys_are_sorted() {
        let result = item_to_json(&item(&[
            ("zeta", AttributeValue::S("z".to_string())),
            ("alpha", AttributeValue::S("a".to_string())),
        ]))
        .unwrap();

        let keys: Vec<_> = result.keys().cloned().collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_item() {
        let result = item_to_json(&HashMap::new()).unwrap();
        assert!(result.is_empty());
    }
}
