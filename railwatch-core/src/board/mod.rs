//! Canonical per-line records: building, classifying and ordering them.

mod builder;
mod classify;
mod record;


pub use builder::{RecordBuilder, RecordError, SortOrder};
pub use classify::{
    Classifier, MARKER_IMPORTANT, MARKER_RESUME, classify_markers, classify_phrase,
};
pub use record::{LineId, LineStatus, RawTriple, Severity};
