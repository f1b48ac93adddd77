use crate::snapshot::SnapshotError;
use crate::source::{FetchError, ParseError};
use std::fmt;

/// Where an update cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStage {
    Idle,
    Fetching,
    Parsing,
    Building,
    Publishing,
}

impl CycleStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleStage::Idle => "idle",
            CycleStage::Fetching => "fetching",
            CycleStage::Parsing => "parsing",
            CycleStage::Building => "building",
            CycleStage::Publishing => "publishing",
        }
    }
}

impl fmt::Display for CycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a cycle ended without committing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Encode(#[from] SnapshotError),
}

impl CycleError {
    /// The stage the cycle failed in.
    pub fn stage(&self) -> CycleStage {
        match self {
            CycleError::Fetch(_) => CycleStage::Fetching,
            CycleError::Parse(_) => CycleStage::Parsing,
            CycleError::Encode(_) => CycleStage::Building,
        }
    }
}

/// Outcome of a committed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub epoch: u64,
    pub lines: usize,
    pub delivered: usize,
}
