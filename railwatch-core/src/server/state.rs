use crate::broadcast::BroadcastHub;
use crate::shutdown::ShutdownSignal;
use crate::snapshot::SnapshotStore;
use std::sync::Arc;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SnapshotStore>,
    pub hub: BroadcastHub,
    pub shutdown: ShutdownSignal,
}
