//! Bridge envelope parsing (panic-free).
//!
//! Wire shape: `{ "id": "<string>", "payload": <any JSON value> }`.
//!
//! Parsing rules:
//! - The body must be a JSON object, otherwise `MalformedEnvelope`.
//! - `id` must be present and a string, otherwise `MissingId`.
//! - The `payload` key must be present; its value (even `null`) is not
//!   interpreted here.

use serde_json::Value;

use crate::error::ProtocolError;

const ID_KEY: &str = "id";
const PAYLOAD_KEY: &str = "payload";

/// A well-formed bridge request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    /// Correlation id chosen by the script side; echo it in the response.
    pub id: String,
    /// Opaque payload, interpreted by the handler.
    pub payload: Value,
}

impl ParsedRequest {
    pub fn into_parts(self) -> (String, Value) {
        (self.id, self.payload)
    }
}

/// Parse a bridge message body into a request.
pub fn parse(body: &Value) -> Result<ParsedRequest, ProtocolError> {
    let map = body.as_object().ok_or(ProtocolError::MalformedEnvelope)?;

    let id = map
        .get(ID_KEY)
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingId)?;

    let payload = map.get(PAYLOAD_KEY).ok_or(ProtocolError::MissingPayload)?;

    Ok(ParsedRequest {
        id: id.to_owned(),
        payload: payload.clone(),
    })
}
