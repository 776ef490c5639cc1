//! Host view: the native side of an embedded web runtime.
//!
//! `BridgeView` owns a content controller and delegates script evaluation
//! to a [`ScriptHost`]. Installing a handler routes the bridge channel (and
//! any configured pass-through channels) to one shared [`Dispatcher`].
//!
//! Lifecycle: `install` once, `uninstall` before the view is discarded.

use std::sync::Arc;

use serde_json::Value;

use tigon_core::error::Result;
use tigon_core::protocol::{ChannelMessage, BRIDGE_CHANNEL};

use crate::config::ViewSection;
use crate::dispatch::{Dispatcher, MessageHandler};
use crate::executor::{ScriptCompletion, ScriptHost};
use crate::transport::{ScriptMessageReceiver, UserContentController};

pub struct BridgeView {
    controller: Arc<UserContentController>,
    host: Arc<dyn ScriptHost>,
    allows_inline_media_playback: bool,
    passthrough_channels: Vec<String>,
}

impl BridgeView {
    pub fn new(cfg: &ViewSection, host: Arc<dyn ScriptHost>) -> Self {
        Self {
            controller: Arc::new(UserContentController::new()),
            host,
            allows_inline_media_playback: cfg.allows_inline_media_playback,
            passthrough_channels: cfg.passthrough_channels.clone(),
        }
    }

    pub fn content_controller(&self) -> Arc<UserContentController> {
        Arc::clone(&self.controller)
    }

    pub fn allows_inline_media_playback(&self) -> bool {
        self.allows_inline_media_playback
    }

    pub fn is_installed(&self) -> bool {
        self.controller.is_registered(BRIDGE_CHANNEL)
    }

    /// Route the bridge channel to `handler`. The view does not keep the
    /// handler alive.
    pub fn install<H: MessageHandler + 'static>(&self, handler: &Arc<H>) -> Result<()> {
        let dispatcher = self.controller.install_bridge(handler)?;

        for (n, ch) in self.passthrough_channels.iter().enumerate() {
            let receiver: Arc<dyn ScriptMessageReceiver> = Arc::<Dispatcher>::clone(&dispatcher);
            if let Err(e) = self.controller.register_channel(ch.as_str(), receiver) {
                // roll back to the pre-install state
                for done in &self.passthrough_channels[..n] {
                    let _ = self.controller.unregister_channel(done);
                }
                let _ = self.controller.uninstall_bridge();
                return Err(e);
            }
        }

        tracing::info!(
            channel = BRIDGE_CHANNEL,
            passthrough = ?self.passthrough_channels,
            "bridge installed"
        );
        Ok(())
    }

    pub fn uninstall(&self) -> Result<()> {
        self.controller.uninstall_bridge()?;
        for ch in &self.passthrough_channels {
            if self.controller.unregister_channel(ch).is_err() {
                tracing::debug!(channel = %ch, "pass-through channel already gone");
            }
        }
        tracing::info!(channel = BRIDGE_CHANNEL, "bridge uninstalled");
        Ok(())
    }

    /// What the web runtime does when a script posts `body` to `channel`.
    pub fn post_message(&self, channel: &str, body: Value) -> Result<()> {
        self.controller.deliver(ChannelMessage::new(channel, body))
    }
}

impl ScriptHost for BridgeView {
    fn submit_script(&self, script: String, completion: ScriptCompletion) {
        self.host.submit_script(script, completion);
    }
}

impl Drop for BridgeView {
    fn drop(&mut self) {
        if self.is_installed() {
            tracing::warn!(
                "bridge view dropped while the bridge is still installed; \
                 call uninstall() during teardown"
            );
        }
    }
}
