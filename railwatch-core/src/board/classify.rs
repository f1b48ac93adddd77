use crate::board::record::Severity;
use crate::translate::{NORMAL, SUSPENDED};
use serde::{Deserialize, Serialize};

/// Marker tag for an important (suspended) status.
pub const MARKER_IMPORTANT: &str = "important";

/// Marker tag for a resuming (degraded) status.
pub const MARKER_RESUME: &str = "resume";

/// Which part of the status cell decides severity.
///
/// Page revisions differ: some carry only the phrase, some tag the cell. One
/// strategy is used per deployment; they are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classifier {
    /// Compare the raw status phrase.
    #[default]
    Lexical,
    /// Inspect the tags on the status cell.
    Markers,
}

impl Classifier {
    pub fn classify(&self, status: &str, markers: &[String]) -> Severity {
        match self {
            Classifier::Lexical => classify_phrase(status),
            Classifier::Markers => classify_markers(markers),
        }
    }
}

pub fn classify_phrase(status: &str) -> Severity {
    match status {
        SUSPENDED => Severity::Suspended,
        NORMAL => Severity::Normal,
        _ => Severity::Degraded,
    }
}

pub fn classify_markers<S: AsRef<str>>(markers: &[S]) -> Severity {
    let has = |tag: &str| markers.iter().any(|m| m.as_ref() == tag);

    if has(MARKER_IMPORTANT) {
        Severity::Suspended
    } else if has(MARKER_RESUME) {
        Severity::Degraded
    } else {
        Severity::Normal
    }
}
