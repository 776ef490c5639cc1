//! Script calls emitted into the web runtime.
//!
//! Receiver names are fixed identifiers of `tigon.js`:
//! - `tigon.receivedSuccessResponse('<id>', <json>)`
//! - `tigon.receivedErrorResponse('<id>', <json>)`
//! - `tigon.receivedMessage(<message>)`

use std::fmt;

use super::response::{stringify, ResponseValue};

/// Global object installed by `tigon.js` in the page.
pub const BRIDGE_OBJECT: &str = "tigon";

const SUCCESS_RECEIVER: &str = "receivedSuccessResponse";
const ERROR_RECEIVER: &str = "receivedErrorResponse";
const MESSAGE_RECEIVER: &str = "receivedMessage";

/// A script ready to be evaluated by the host view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptCall(String);

impl ScriptCall {
    /// Wrap an arbitrary script. Prefer the `encode_*` helpers for bridge calls.
    pub fn raw(script: impl Into<String>) -> Self {
        ScriptCall(script.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ScriptCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ScriptCall> for String {
    fn from(call: ScriptCall) -> Self {
        call.0
    }
}

/// Resolve the request `id` with a success value.
pub fn encode_success(id: &str, value: &ResponseValue) -> ScriptCall {
    response_call(SUCCESS_RECEIVER, id, &stringify(value))
}

/// Reject the request `id` with `{"error": <message>}`.
pub fn encode_error<E: fmt::Display + ?Sized>(id: &str, error: &E) -> ScriptCall {
    response_call(ERROR_RECEIVER, id, &stringify(&ResponseValue::error(error)))
}

/// Unsolicited native -> script message. `message` is inserted as-is, so it
/// should already be a JSON literal.
pub fn encode_message(message: &str) -> ScriptCall {
    ScriptCall(format!("{BRIDGE_OBJECT}.{MESSAGE_RECEIVER}({message})"))
}

fn response_call(receiver: &str, id: &str, body: &str) -> ScriptCall {
    ScriptCall(format!(
        "{BRIDGE_OBJECT}.{receiver}('{}', {})",
        escape_single_quoted(id),
        escape_line_separators(body)
    ))
}

/// `body` is JSON, so U+2028/U+2029 can only occur inside string literals,
/// where the `\u` escape is equivalent.
fn escape_line_separators(body: &str) -> String {
    body.replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Escape `s` for a single-quoted JavaScript string literal.
fn escape_single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
