//! Line-oriented message pump for the headless host.
//!
//! Each input line is one `{"channel": ..., "body": ...}` object, posted to
//! the view as if a page script had sent it.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use tigon_core::error::{Result, TigonError};
use tigon_core::protocol::ChannelMessage;

use crate::view::BridgeView;

/// What happened to the lines read by [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Lines handed to a channel receiver.
    pub delivered: usize,
    /// Lines that were not a channel message.
    pub invalid: usize,
    /// Channel messages with no receiver on their channel.
    pub undelivered: usize,
}

/// Post every message read from `input` to `view` until EOF.
///
/// Blank lines are ignored. Invalid lines and messages for unknown channels
/// are logged and skipped; only a read failure ends the loop with an error.
pub async fn run<R: AsyncBufRead + Unpin>(view: &BridgeView, input: R) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut lines = input.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| TigonError::Internal(format!("read input failed: {e}")))?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let msg: ChannelMessage = match serde_json::from_str(line) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(error = %e, "skipping line that is not a channel message");
                stats.invalid += 1;
                continue;
            }
        };

        match view.post_message(&msg.channel, msg.body) {
            Ok(()) => stats.delivered += 1,
            Err(e) => {
                tracing::warn!(error = %e, "message not delivered");
                stats.undelivered += 1;
            }
        }
    }

    Ok(stats)
}
