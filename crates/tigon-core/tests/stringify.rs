//! Response stringification shapes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::SystemTime;

use serde_json::json;

use tigon_core::protocol::response::{stringify, ResponseValue};
use tigon_core::ProtocolError;

#[test]
fn mapping() {
    let v = ResponseValue::from(json!({ "an": "array" }));
    assert_eq!(stringify(&v), "{\n  \"an\" : \"array\"\n}");
}

#[test]
fn sequence() {
    let v = ResponseValue::from(json!(["an", "array"]));
    assert_eq!(stringify(&v), "[\n  \"an\",\n  \"array\"\n]");
}

#[test]
fn plain_string() {
    let v = ResponseValue::from("a string");
    assert_eq!(stringify(&v), "{\n  \"response\" : \"a string\"\n}");
}

#[test]
fn plain_string_is_escaped() {
    let v = ResponseValue::from("say \"hi\"");
    assert_eq!(stringify(&v), "{\n  \"response\" : \"say \\\"hi\\\"\"\n}");
}

#[test]
fn boolean() {
    assert_eq!(stringify(&true.into()), "{\n  \"response\" : true\n}");
    assert_eq!(stringify(&false.into()), "{\n  \"response\" : false\n}");
}

#[test]
fn error() {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "test error");
    assert_eq!(
        stringify(&ResponseValue::error(&err)),
        "{\n  \"error\" : \"test error\"\n}"
    );
}

#[test]
fn protocol_error_uses_its_message() {
    let v = ResponseValue::error(&ProtocolError::MissingPayload);
    assert_eq!(stringify(&v), "{\n  \"error\" : \"message payload missing\"\n}");
}

#[test]
fn timestamp_degrades_to_empty_object() {
    let v = ResponseValue::from(SystemTime::now());
    assert!(matches!(v, ResponseValue::Unrepresentable(_)));
    assert_eq!(stringify(&v), "{}");
}

#[test]
fn numbers_and_null_degrade_to_empty_object() {
    assert_eq!(stringify(&json!(42).into()), "{}");
    assert_eq!(stringify(&json!(null).into()), "{}");
}

#[test]
fn nested_values_indent_per_level() {
    let v = ResponseValue::from(json!({ "a": [1, { "b": null }], "c": {} }));
    let expected = "{\n  \"a\" : [\n    1,\n    {\n      \"b\" : null\n    }\n  ],\n  \"c\" : {}\n}";
    assert_eq!(stringify(&v), expected);
}

#[test]
fn empty_containers() {
    assert_eq!(stringify(&json!({}).into()), "{}");
    assert_eq!(stringify(&json!([]).into()), "[]");
}

#[test]
fn stringify_is_pure() {
    let v = ResponseValue::from(json!({ "z": 1, "a": [true, "x"] }));
    assert_eq!(stringify(&v), stringify(&v));
}
