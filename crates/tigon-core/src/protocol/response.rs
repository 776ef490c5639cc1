//! Outbound response values and their canonical serialized shape.
//!
//! Every response sent back to `tigon.js` is a JSON object or array:
//!
//! | value                | serialized as                 |
//! |----------------------|-------------------------------|
//! | mapping / sequence   | the value itself              |
//! | plain string `s`     | `{"response": s}`             |
//! | error `e`            | `{"error": <message of e>}`   |
//! | boolean `b`          | `{"response": b}`             |
//! | anything else        | `{}`                          |
//!
//! Output is pretty-printed with a two-space indent and `" : "` between keys
//! and values, which is what the script side has always received.

use std::fmt;
use std::io;
use std::time::SystemTime;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{json, Map, Serializer, Value};

/// Fallback for values that have no response shape.
pub const EMPTY_OBJECT: &str = "{}";

/// Response value categories understood by the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    Mapping(Map<String, Value>),
    Sequence(Vec<Value>),
    PlainString(String),
    /// Human-readable error message.
    Error(String),
    Boolean(bool),
    /// A value with no response shape; carries a description for logs.
    Unrepresentable(String),
}

impl ResponseValue {
    /// Error response carrying the display message of `err`.
    pub fn error<E: fmt::Display + ?Sized>(err: &E) -> Self {
        ResponseValue::Error(err.to_string())
    }
}

impl From<Value> for ResponseValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Object(m) => ResponseValue::Mapping(m),
            Value::Array(a) => ResponseValue::Sequence(a),
            Value::String(s) => ResponseValue::PlainString(s),
            Value::Bool(b) => ResponseValue::Boolean(b),
            other @ (Value::Number(_) | Value::Null) => {
                ResponseValue::Unrepresentable(other.to_string())
            }
        }
    }
}

impl From<Map<String, Value>> for ResponseValue {
    fn from(m: Map<String, Value>) -> Self {
        ResponseValue::Mapping(m)
    }
}

impl From<Vec<Value>> for ResponseValue {
    fn from(a: Vec<Value>) -> Self {
        ResponseValue::Sequence(a)
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::PlainString(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::PlainString(s.to_owned())
    }
}

impl From<bool> for ResponseValue {
    fn from(b: bool) -> Self {
        ResponseValue::Boolean(b)
    }
}

impl From<SystemTime> for ResponseValue {
    fn from(t: SystemTime) -> Self {
        ResponseValue::Unrepresentable(format!("{t:?}"))
    }
}

/// Serialize a response value into its canonical shape. Never fails.
pub fn stringify(value: &ResponseValue) -> String {
    let encoded = match value {
        ResponseValue::Mapping(m) => to_pretty(m),
        ResponseValue::Sequence(a) => to_pretty(a),
        ResponseValue::PlainString(s) => to_pretty(&json!({ "response": s })),
        ResponseValue::Error(msg) => to_pretty(&json!({ "error": msg })),
        ResponseValue::Boolean(b) => to_pretty(&json!({ "response": b })),
        ResponseValue::Unrepresentable(desc) => {
            tracing::warn!(value = %desc, "no response shape for value, sending empty object");
            return EMPTY_OBJECT.to_owned();
        }
    };

    encoded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to stringify response, sending empty object");
        EMPTY_OBJECT.to_owned()
    })
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    let mut ser = Serializer::with_formatter(Vec::with_capacity(128), BridgeFormatter::default());
    value.serialize(&mut ser)?;
    String::from_utf8(ser.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

const INDENT: &[u8] = b"  ";

/// Pretty printer matching the script side's expected layout
/// (`"key" : value`, two-space indent).
#[derive(Debug, Default)]
struct BridgeFormatter {
    depth: usize,
    has_value: bool,
}

impl BridgeFormatter {
    fn newline_indent<W: ?Sized + io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(b"\n")?;
        for _ in 0..self.depth {
            w.write_all(INDENT)?;
        }
        Ok(())
    }

    fn open<W: ?Sized + io::Write>(&mut self, w: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        w.write_all(token)
    }

    fn close<W: ?Sized + io::Write>(&mut self, w: &mut W, token: &[u8]) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        if self.has_value {
            self.newline_indent(w)?;
        }
        w.write_all(token)
    }

    fn separate<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        if !first {
            w.write_all(b",")?;
        }
        self.newline_indent(w)
    }
}

impl Formatter for BridgeFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.separate(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.separate(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}
