use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// One row of the status table, as extracted from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTriple {
    pub line: String,
    pub status: String,
    /// Categorical tags attached to the status cell (e.g. `important`).
    pub markers: Vec<String>,
    pub detail: String,
}

impl RawTriple {
    pub fn new(line: impl Into<String>, status: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            status: status.into(),
            markers: Vec::new(),
            detail: detail.into(),
        }
    }

    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }
}

/// How disruptive a status is. Higher is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Normal = 0,
    Degraded = 1,
    Suspended = 2,
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Severity::Normal),
            1 => Ok(Severity::Degraded),
            2 => Ok(Severity::Suspended),
            other => Err(format!("invalid severity level {other}")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Stable identifier for a line, derived from its source-language name.
///
/// Independent of translation tables so clients can key DOM updates on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn from_name(name: &str) -> Self {
        LineId(format!("line-{:016x}", xxh3_64(name.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical, bilingual status of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStatus {
    pub id: LineId,
    pub line: String,
    pub line_en: String,
    pub status: String,
    pub status_en: String,
    pub reason: String,
    pub detail: String,
    pub severity: Severity,
    pub is_severe: bool,
}
