//! Protocol modules (inbound envelope + outbound script calls).
//!
//! This module hosts both directions of the bridge wire format:
//! - Inbound: `ChannelMessage` bodies carrying `{id, payload}` envelopes.
//! - Outbound: response values stringified into `tigon.*` script calls.
//!
//! Everything here is pure: malformed input is reported as `ProtocolError`
//! and unencodable output degrades to `{}` instead of panicking.

pub mod channel;
pub mod envelope;
pub mod response;
pub mod script;

pub use channel::{ChannelMessage, BRIDGE_CHANNEL};
pub use envelope::{parse, ParsedRequest};
pub use response::{stringify, ResponseValue};
pub use script::{encode_error, encode_message, encode_success, ScriptCall, BRIDGE_OBJECT};
