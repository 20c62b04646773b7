//! Tolerant extraction helpers for loosely-shaped VISS response trees.

use serde_json::Value;

use crate::error::{VissError, VissResult};

/// Text of a scalar node. The VISS API mixes string and numeric encodings
/// for the same fields, so both are accepted.
pub(crate) fn text_value(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a scalar field, failing when it is absent or not a scalar.
pub(crate) fn mandatory_field(node: &Value, field: &str) -> VissResult<String> {
    node.get(field)
        .and_then(text_value)
        .ok_or_else(|| VissError::MissingField {
            field: field.to_string(),
            node: node.to_string(),
        })
}

/// Extract a scalar field if present.
pub(crate) fn optional_field(node: &Value, field: &str) -> Option<String> {
    node.get(field).and_then(text_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_value_accepts_strings_and_numbers() {
        assert_eq!(text_value(&json!("abc")), Some("abc".to_string()));
        assert_eq!(text_value(&json!(3600000)), Some("3600000".to_string()));
        assert_eq!(text_value(&json!({"nested": true})), None);
        assert_eq!(text_value(&json!(null)), None);
    }

    #[test]
    fn test_mandatory_field() {
        let node = json!({"begin": "2020-01-01T00:00:00Z"});
        assert_eq!(
            mandatory_field(&node, "begin").unwrap(),
            "2020-01-01T00:00:00Z"
        );

        let err = mandatory_field(&node, "end").unwrap_err();
        assert!(matches!(err, VissError::MissingField { field, .. } if field == "end"));
    }

    #[test]
    fn test_optional_field() {
        let node = json!({"seperator": 3600000});
        assert_eq!(
            optional_field(&node, "seperator"),
            Some("3600000".to_string())
        );
        assert_eq!(optional_field(&node, "missing"), None);
    }
}
