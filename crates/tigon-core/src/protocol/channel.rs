//! Raw transport unit posted by the web runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel name shared with `tigon.js`. Changing it breaks both ends.
pub const BRIDGE_CHANNEL: &str = "tigon";

/// A message as delivered by the transport: the channel it was posted on and
/// its untyped body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelMessage {
    /// Channel (message handler name) the script posted to.
    pub channel: String,
    /// Untyped message body.
    #[serde(default)]
    pub body: Value,
}

impl ChannelMessage {
    pub fn new(channel: impl Into<String>, body: Value) -> Self {
        Self {
            channel: channel.into(),
            body,
        }
    }

    /// Whether this message belongs to the bridge protocol.
    pub fn is_bridge(&self) -> bool {
        self.channel == BRIDGE_CHANNEL
    }
}
