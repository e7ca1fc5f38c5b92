//! Tests for JSON-valued arguments.

use serde_json::json;

use super::super::validated::parse_json_values;
use super::*;

#[test]
fn parses_each_value() {
    let values = vec![r#"{"title":"a"}"#.to_string(), r#"{"title":"b"}"#.to_string()];

    let parsed = parse_json_values(&values).unwrap();

    assert_eq!(parsed, vec![json!({"title": "a"}), json!({"title": "b"})]);
}

#[test]
fn empty_input_yields_empty_list() {
    assert!(parse_json_values(&[]).unwrap().is_empty());
}

#[test]
fn invalid_value_is_reported() {
    let values = vec![r#"{"title":"a"}"#.to_string(), "{not json".to_string()];

    let result = parse_json_values(&values);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidJson { ref value, .. }) if value == "{not json"
    ));
}
