//! Change notification
//!
//! Subscribers only learn that the state changed and in which order; they
//! fetch the new state themselves.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Event name sent after every state write
pub const STATE_UPDATED: &str = "state.updated";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEvent {
    pub event: String,
    pub seq: u64,
}

/// Publish/subscribe channel for state changes
#[derive(Clone, Debug)]
pub struct SyncChannel {
    tx: broadcast::Sender<SyncEvent>,
    seq: Arc<AtomicU64>,
}

impl SyncChannel {
    pub fn new(capacity: usize) -> Self {
        Self::with_counter(capacity, Arc::new(AtomicU64::new(0)))
    }

    /// Share a sequence counter owned elsewhere
    pub fn with_counter(capacity: usize, seq: Arc<AtomicU64>) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx, seq }
    }

    /// Notify subscribers; having none is not an error
    pub fn publish(&self) -> SyncEvent {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let event = SyncEvent {
            event: STATE_UPDATED.to_string(),
            seq,
        };
        let receivers = self.tx.send(event.clone()).unwrap_or(0);
        debug!(seq, receivers, "published {STATE_UPDATED}");
        event
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.tx.subscribe()
    }

    /// Sequence number of the last published event
    pub fn seq(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }
}

impl Default for SyncChannel {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn subscribers_see_increasing_sequence_numbers() {
        let channel = SyncChannel::default();
        let mut rx = channel.subscribe();
        channel.publish();
        channel.publish();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first, SyncEvent { event: "state.updated".into(), seq: 1 });
        assert_eq!(second.seq, 2);
        assert_eq!(channel.seq(), 2);
    }

    #[test]
    fn publishing_without_subscribers_still_counts() {
        let counter = Arc::new(AtomicU64::new(41));
        let channel = SyncChannel::with_counter(8, counter.clone());
        assert_eq!(channel.publish().seq, 42);
        assert_eq!(counter.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn wire_shape() {
        let event = SyncEvent { event: STATE_UPDATED.into(), seq: 7 };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"state.updated","seq":7}"#
        );
    }
}
