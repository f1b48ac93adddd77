use crate::broadcast::guard::SubscriptionGuard;
use crate::snapshot::{Frame, SnapshotStore};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live subscriber mailboxes.
///
/// Each mailbox is a watch channel holding only the newest frame, so a slow
/// reader never holds up delivery to anyone else.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    mailboxes: DashMap<SubscriberId, watch::Sender<Arc<Frame>>>,
    next_id: AtomicU64,
}

impl Registry {
    pub(crate) fn remove(&self, id: SubscriberId) -> bool {
        self.mailboxes.remove(&id).is_some()
    }
}

/// Fans committed frames out to every live subscriber.
///
/// Cloning is cheap; clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct BroadcastHub {
    registry: Arc<Registry>,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Its first frame is the store's current one.
    pub fn subscribe(&self, store: &SnapshotStore) -> Subscription {
        let id = SubscriberId(self.registry.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, mut rx) = watch::channel(store.frame());

        self.registry.mailboxes.insert(id, tx);

        // A publish may have landed between reading the store and inserting
        // the mailbox; re-read so the subscriber cannot be left behind.
        if let Some(tx) = self.registry.mailboxes.get(&id) {
            offer(&tx, &store.frame());
        }

        let pending = rx.borrow_and_update().clone();
        tracing::debug!(subscriber = %id, epoch = pending.epoch, "subscriber registered");

        Subscription {
            id,
            rx,
            pending: Some(pending),
            _guard: SubscriptionGuard::new_registered(id, self.registry.clone()),
        }
    }

    /// Offer `frame` to every subscriber, pruning the ones that are gone.
    ///
    /// Returns the number of subscribers the frame was offered to.
    pub fn publish(&self, frame: &Arc<Frame>) -> usize {
        let mut delivered = 0;
        let mut pruned = 0;

        self.registry.mailboxes.retain(|_, tx| {
            if tx.is_closed() {
                pruned += 1;
                return false;
            }
            offer(tx, frame);
            delivered += 1;
            true
        });

        if pruned > 0 {
            tracing::debug!(pruned, "pruned closed subscribers");
        }
        delivered
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.registry.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.mailboxes.len()
    }
}

/// Store `frame` unless the mailbox already holds a newer one.
fn offer(tx: &watch::Sender<Arc<Frame>>, frame: &Arc<Frame>) {
    tx.send_if_modified(|current| {
        if frame.epoch > current.epoch {
            *current = frame.clone();
            true
        } else {
            false
        }
    });
}

/// Handle held by one connection.
///
/// Dropping it unregisters the subscriber.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    rx: watch::Receiver<Arc<Frame>>,
    pending: Option<Arc<Frame>>,
    _guard: SubscriptionGuard,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next frame.
    ///
    /// The first call returns immediately with the frame current at
    /// subscription time. Returns `None` once the subscriber was removed.
    pub async fn next(&mut self) -> Option<Arc<Frame>> {
        if let Some(frame) = self.pending.take() {
            return Some(frame);
        }

        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
