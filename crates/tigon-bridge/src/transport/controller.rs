use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use tigon_core::error::{Result, TigonError};
use tigon_core::protocol::{ChannelMessage, BRIDGE_CHANNEL};

use crate::dispatch::{Dispatcher, MessageHandler};

/// Sink for messages posted on a named channel.
pub trait ScriptMessageReceiver: Send + Sync {
    fn did_receive(&self, message: ChannelMessage);
}

/// Channel name -> receiver registry. Owns its receivers.
#[derive(Default)]
pub struct UserContentController {
    receivers: DashMap<String, Arc<dyn ScriptMessageReceiver>>,
}

impl UserContentController {
    pub fn new() -> Self {
        Self {
            receivers: DashMap::new(),
        }
    }

    pub fn register_channel(
        &self,
        name: impl Into<String>,
        receiver: Arc<dyn ScriptMessageReceiver>,
    ) -> Result<()> {
        match self.receivers.entry(name.into()) {
            Entry::Occupied(e) => Err(TigonError::ChannelInUse(e.key().clone())),
            Entry::Vacant(e) => {
                tracing::debug!(channel = %e.key(), "channel registered");
                e.insert(receiver);
                Ok(())
            }
        }
    }

    pub fn unregister_channel(&self, name: &str) -> Result<Arc<dyn ScriptMessageReceiver>> {
        let (_, receiver) = self
            .receivers
            .remove(name)
            .ok_or_else(|| TigonError::NotInstalled(name.to_string()))?;
        tracing::debug!(channel = %name, "channel unregistered");
        Ok(receiver)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.receivers.contains_key(name)
    }

    pub fn registered_channels(&self) -> Vec<String> {
        self.receivers.iter().map(|e| e.key().clone()).collect()
    }

    /// Hand a posted message to the receiver of its channel.
    pub fn deliver(&self, message: ChannelMessage) -> Result<()> {
        // Clone out of the map so the shard lock is released before the
        // receiver runs; handlers may (un)register channels re-entrantly.
        let receiver = self
            .receivers
            .get(message.channel.as_str())
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| TigonError::UnknownChannel(message.channel.clone()))?;

        receiver.did_receive(message);
        Ok(())
    }

    /// Register a [`Dispatcher`] for `handler` on the bridge channel.
    ///
    /// The handler is held weakly; call [`uninstall_bridge`](Self::uninstall_bridge)
    /// during teardown. The returned dispatcher may be registered on further
    /// channels to route their traffic to `on_unrecognized_message`.
    pub fn install_bridge<H: MessageHandler + 'static>(
        &self,
        handler: &Arc<H>,
    ) -> Result<Arc<Dispatcher>> {
        let dispatcher = Arc::new(Dispatcher::new(handler));
        let receiver = Arc::clone(&dispatcher) as Arc<dyn ScriptMessageReceiver>;
        self.register_channel(BRIDGE_CHANNEL, receiver)?;
        Ok(dispatcher)
    }

    pub fn uninstall_bridge(&self) -> Result<()> {
        self.unregister_channel(BRIDGE_CHANNEL).map(|_| ())
    }
}
