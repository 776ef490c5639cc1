//! JSON test vector loader shared by envelope tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub expect: Option<ExpectRequest>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectRequest {
    pub id: String,
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}"))
        .unwrap_or_else(|e| panic!("missing vector {name}: {e}"));
    serde_json::from_str(&s).unwrap()
}
