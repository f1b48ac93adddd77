use crate::broadcast::hub::{Registry, SubscriberId};
use std::sync::Arc;

/// RAII guard for one registered subscriber.
///
/// Invariants:
/// - A guard is created only after the subscriber was inserted
/// - The subscriber is removed from the registry at most once, on Drop
#[derive(Debug)]
pub struct SubscriptionGuard {
    id: SubscriberId,
    registry: Arc<Registry>,
}

impl SubscriptionGuard {
    pub(crate) fn new_registered(id: SubscriberId, registry: Arc<Registry>) -> Self {
        Self { id, registry }
    }
}

impl Drop for SubscriptionGuard {
    /// Unregister when the connection goes away.
    fn drop(&mut self) {
        if self.registry.remove(self.id) {
            tracing::debug!(subscriber = %self.id, "subscriber unregistered");
        }
    }
}
