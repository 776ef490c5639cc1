use std::sync::Arc;

use serde_json::Value;

use tigon_core::protocol::ChannelMessage;

use crate::dispatch::MessageHandler;
use crate::executor::{Executor, ScriptHost};

/// Answers every bridge request with its own payload. Useful to prove the
/// round trip from a page without writing a handler.
pub struct EchoHandler {
    host: Arc<dyn ScriptHost>,
}

impl EchoHandler {
    /// `host` should be the script host itself, not the view owning the
    /// bridge, so the handler never keeps the view alive.
    pub fn new(host: Arc<dyn ScriptHost>) -> Self {
        Self { host }
    }
}

impl MessageHandler for EchoHandler {
    fn handle_message(&self, id: String, payload: Value) {
        tracing::debug!(%id, "echo");
        self.host.send_success_response(&id, payload);
    }

    fn on_unrecognized_message(&self, message: ChannelMessage) {
        tracing::info!(channel = %message.channel, body = %message.body, "pass-through message");
    }
}
