use crate::snapshot::snapshot::{Frame, Snapshot, SnapshotError};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Holds the current [`Frame`].
///
/// Reads never block and always observe one whole commit. There is a single
/// writer (the update scheduler); `replace` is one pointer swap.
#[derive(Debug)]
pub struct SnapshotStore {
    current: ArcSwap<Frame>,
}

impl SnapshotStore {
    pub fn new(initial: Snapshot) -> Result<Self, SnapshotError> {
        let frame = Frame::encode(0, initial)?;
        Ok(Self {
            current: ArcSwap::from_pointee(frame),
        })
    }

    /// The latest committed snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.load().snapshot.clone()
    }

    /// The latest committed frame (snapshot, encoding and epoch).
    pub fn frame(&self) -> Arc<Frame> {
        self.current.load_full()
    }

    /// Encode `snapshot` as the frame that would follow the current one.
    ///
    /// Nothing is committed. Only the single writer may call this and
    /// [`commit`](Self::commit), in that order.
    pub fn prepare(&self, snapshot: Snapshot) -> Result<Frame, SnapshotError> {
        let epoch = self.current.load().epoch + 1;
        Frame::encode(epoch, snapshot)
    }

    /// Make a prepared frame current.
    pub fn commit(&self, frame: Frame) -> Arc<Frame> {
        let frame = Arc::new(frame);
        let old = self.current.swap(frame.clone());
        tracing::debug!(
            old_epoch = old.epoch,
            new_epoch = frame.epoch,
            lines = frame.snapshot.lines.len(),
            "snapshot replaced"
        );
        frame
    }

    /// Encode and commit a new snapshot.
    ///
    /// If encoding fails nothing is committed and the previous frame stays
    /// current.
    pub fn replace(&self, snapshot: Snapshot) -> Result<Arc<Frame>, SnapshotError> {
        let frame = self.prepare(snapshot)?;
        Ok(self.commit(frame))
    }
}
