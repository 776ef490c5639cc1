//! Bridge dispatcher (trampoline).
//!
//! The transport keeps a strong reference to whatever receiver is registered
//! on a channel. If that receiver were the application handler, the host view
//! would end up owning itself through its own content pipeline. The
//! `Dispatcher` is the object the transport owns instead; it reaches the
//! handler through a `Weak` only.

use std::sync::{Arc, Weak};

use serde_json::Value;

use tigon_core::protocol::{envelope, ChannelMessage};
use tigon_core::ProtocolError;

use crate::transport::ScriptMessageReceiver;

/// How the application receives messages posted by `tigon.js`.
///
/// Every inbound message produces exactly one callback.
pub trait MessageHandler: Send + Sync {
    /// A well-formed bridge request.
    ///
    /// Reply with `Executor::send_success_response` or
    /// `Executor::send_error_response` using the same `id`.
    fn handle_message(&self, id: String, payload: Value);

    /// A bridge message whose body is not a valid envelope.
    fn message_error(&self, error: ProtocolError, message: &ChannelMessage) {
        tracing::warn!(code = error.code(), body = %message.body, "{error}");
    }

    /// A message posted on a channel other than the bridge channel.
    fn on_unrecognized_message(&self, message: ChannelMessage) {
        tracing::debug!(channel = %message.channel, "ignoring non-bridge message");
    }
}

/// Routes channel messages to a [`MessageHandler`] it does not own.
pub struct Dispatcher {
    delegate: Weak<dyn MessageHandler>,
}

impl Dispatcher {
    pub fn new<H: MessageHandler + 'static>(delegate: &Arc<H>) -> Self {
        let delegate: Weak<dyn MessageHandler> = Arc::downgrade(delegate) as Weak<H>;
        Self { delegate }
    }

    /// Whether the handler is still alive.
    pub fn is_attached(&self) -> bool {
        self.delegate.strong_count() > 0
    }

    pub fn on_message(&self, message: ChannelMessage) {
        let Some(handler) = self.delegate.upgrade() else {
            tracing::warn!(
                channel = %message.channel,
                "message handler dropped, discarding message"
            );
            return;
        };

        if !message.is_bridge() {
            handler.on_unrecognized_message(message);
            return;
        }

        match envelope::parse(&message.body) {
            Ok(req) => {
                tracing::debug!(id = %req.id, "dispatching bridge message");
                let (id, payload) = req.into_parts();
                handler.handle_message(id, payload);
            }
            Err(e) => handler.message_error(e, &message),
        }
    }
}

impl ScriptMessageReceiver for Dispatcher {
    fn did_receive(&self, message: ChannelMessage) {
        self.on_message(message);
    }
}
