//! The current snapshot and its atomic replacement.

mod snapshot;
mod store;

#[cfg(test)]
mod tests;

pub use snapshot::{Frame, Snapshot, SnapshotError, TIMESTAMP_FORMAT};
pub use store::SnapshotStore;
