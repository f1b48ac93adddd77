use crate::board::LineStatus;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Wire format of `updated`: local civil time.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One immutable, timestamped set of line statuses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub lines: Vec<LineStatus>,
    #[serde(rename = "updated", serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Tz>,
    pub live: bool,
}

impl Snapshot {
    /// The value served before the first successful fetch.
    pub fn placeholder(now: DateTime<Tz>) -> Self {
        Self {
            lines: Vec::new(),
            updated_at: now,
            live: false,
        }
    }

    pub fn live(lines: Vec<LineStatus>, fetched_at: DateTime<Tz>) -> Self {
        Self {
            lines,
            updated_at: fetched_at,
            live: true,
        }
    }

    pub fn updated(&self) -> String {
        self.updated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Tz>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

/// A committed snapshot together with its JSON encoding.
///
/// `epoch` increases by one per commit; the placeholder is epoch 0.
#[derive(Debug)]
pub struct Frame {
    pub epoch: u64,
    pub snapshot: Arc<Snapshot>,
    pub json: Arc<str>,
}

impl Frame {
    pub fn encode(epoch: u64, snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let json = serde_json::to_string(&snapshot)?;
        Ok(Self {
            epoch,
            snapshot: Arc::new(snapshot),
            json: Arc::from(json),
        })
    }
}
