use crate::board::classify::Classifier;
use crate::board::record::{LineId, LineStatus, RawTriple};
use crate::translate::Translator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("row has no line name")]
    MissingLineName,
}

/// Ordering applied to the records of a snapshot.
///
/// Both orders are stable: rows with equal keys keep their page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// `line_en` ascending, ordinal comparison.
    #[default]
    Line,
    /// Worst severity first, then `line_en` ascending.
    Severity,
}

impl SortOrder {
    pub fn sort(&self, lines: &mut [LineStatus]) {
        match self {
            SortOrder::Line => lines.sort_by(|a, b| a.line_en.cmp(&b.line_en)),
            SortOrder::Severity => lines.sort_by(|a, b| {
                b.severity
                    .cmp(&a.severity)
                    .then_with(|| a.line_en.cmp(&b.line_en))
            }),
        }
    }
}

/// Turns raw rows into canonical [`LineStatus`] records.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'t> {
    translator: &'t Translator,
    classifier: Classifier,
    order: SortOrder,
}

impl RecordBuilder<'static> {
    /// Builder over the canonical translation tables.
    pub fn canonical(classifier: Classifier, order: SortOrder) -> Self {
        Self::new(Translator::canonical(), classifier, order)
    }
}

impl<'t> RecordBuilder<'t> {
    pub fn new(translator: &'t Translator, classifier: Classifier, order: SortOrder) -> Self {
        Self {
            translator,
            classifier,
            order,
        }
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Build one record. Deterministic for identical input.
    pub fn build(&self, raw: &RawTriple) -> Result<LineStatus, RecordError> {
        let line = raw.line.trim();
        if line.is_empty() {
            return Err(RecordError::MissingLineName);
        }

        let status = raw.status.trim();
        let detail = raw.detail.trim();
        let t = self.translator;

        Ok(LineStatus {
            id: LineId::from_name(line),
            line: line.to_string(),
            line_en: t.line(line),
            status: status.to_string(),
            status_en: t.status(status),
            reason: t.reason(detail),
            detail: detail.to_string(),
            severity: self.classifier.classify(status, &raw.markers),
            is_severe: t.is_severe(status),
        })
    }

    /// Build and order every usable row.
    ///
    /// Rows that fail to build are skipped, as are repeats of a line already
    /// seen; the rest of the batch is kept.
    pub fn assemble<I>(&self, rows: I) -> Vec<LineStatus>
    where
        I: IntoIterator<Item = RawTriple>,
    {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();

        for (index, raw) in rows.into_iter().enumerate() {
            match self.build(&raw) {
                Ok(record) => {
                    if seen.insert(record.id.clone()) {
                        lines.push(record);
                    } else {
                        tracing::warn!(row = index, line = %record.line, "skipping duplicate line");
                    }
                }
                Err(e) => {
                    tracing::warn!(row = index, error = %e, "skipping malformed row");
                }
            }
        }

        self.order.sort(&mut lines);
        lines
    }
}
