//! Recording doubles shared by the bridge integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use serde_json::Value;

use tigon_bridge::executor::{ScriptCompletion, ScriptHost};
use tigon_bridge::MessageHandler;
use tigon_core::error::TigonError;
use tigon_core::protocol::ChannelMessage;
use tigon_core::ProtocolError;

/// One observed handler callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Message { id: String, payload: Value },
    Error { error: ProtocolError, message: ChannelMessage },
    Unrecognized(ChannelMessage),
}

#[derive(Default)]
pub struct RecordingHandler {
    calls: Mutex<Vec<Call>>,
}

impl RecordingHandler {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl MessageHandler for RecordingHandler {
    fn handle_message(&self, id: String, payload: Value) {
        self.calls.lock().unwrap().push(Call::Message { id, payload });
    }

    fn message_error(&self, error: ProtocolError, message: &ChannelMessage) {
        self.calls.lock().unwrap().push(Call::Error {
            error,
            message: message.clone(),
        });
    }

    fn on_unrecognized_message(&self, message: ChannelMessage) {
        self.calls.lock().unwrap().push(Call::Unrecognized(message));
    }
}

/// Handler that only implements the required callback.
#[derive(Default)]
pub struct MinimalHandler {
    pub ids: Mutex<Vec<String>>,
}

impl MessageHandler for MinimalHandler {
    fn handle_message(&self, id: String, _payload: Value) {
        self.ids.lock().unwrap().push(id);
    }
}

/// Script host that records scripts and optionally fails evaluation.
#[derive(Default)]
pub struct RecordingHost {
    scripts: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl RecordingHost {
    pub fn failing(msg: &str) -> Self {
        Self {
            scripts: Mutex::new(Vec::new()),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl ScriptHost for RecordingHost {
    fn submit_script(&self, script: String, completion: ScriptCompletion) {
        self.scripts.lock().unwrap().push(script);
        match &self.fail_with {
            Some(msg) => completion(Err(TigonError::Script(msg.clone()))),
            None => completion(Ok(())),
        }
    }
}
