//! Restart request coordination.

use tokio::sync::broadcast;

/// Coordinator for restart requests.
///
/// Provides a broadcast channel that the host side subscribes to; a
/// successful configuration change triggers it once the new target has
/// been published.
#[derive(Debug, Clone)]
pub struct RestartSignal {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl RestartSignal {
    /// Create a new restart coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to restart requests.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Request a restart.
    pub fn trigger(&self) {
        tracing::info!(listeners = self.tx.receiver_count(), "Restart requested");
        let _ = self.tx.send(());
    }

    /// Number of active subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for RestartSignal {
    fn default() -> Self {
        Self::new()
    }
}
