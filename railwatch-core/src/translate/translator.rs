use crate::translate::lines::LINES;
use crate::translate::rules::{REASON_RULES, RuleAction, RuleTable, render};
use crate::translate::statuses::{SEVERE, STATUSES};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

static CANONICAL: Lazy<Translator> = Lazy::new(|| {
    let reasons = RuleTable::compile(REASON_RULES).expect("canonical reason rules must compile");
    Translator::new(reasons)
});

/// Which dictionary failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissKind {
    Line,
    Status,
    Reason,
}

impl MissKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissKind::Line => "line",
            MissKind::Status => "status",
            MissKind::Reason => "reason",
        }
    }
}

/// Turns source-language text into canonical English.
///
/// All lookups are total: unmatched input comes back unchanged and a
/// `translation miss` debug event is emitted for it.
#[derive(Debug)]
pub struct Translator {
    lines: HashMap<&'static str, &'static str>,
    statuses: HashMap<&'static str, &'static str>,
    severe: HashSet<&'static str>,
    reasons: RuleTable,
}

impl Translator {
    /// Built-in dictionaries with the given reason rules.
    pub fn new(reasons: RuleTable) -> Self {
        Self {
            lines: LINES.iter().copied().collect(),
            statuses: STATUSES.iter().copied().collect(),
            severe: SEVERE.iter().copied().collect(),
            reasons,
        }
    }

    /// The process-wide translator over the built-in tables.
    pub fn canonical() -> &'static Translator {
        &CANONICAL
    }

    pub fn reason_rules(&self) -> &RuleTable {
        &self.reasons
    }

    pub fn line(&self, name: &str) -> String {
        match self.lines.get(name) {
            Some(en) => (*en).to_string(),
            None => miss(MissKind::Line, name),
        }
    }

    pub fn status(&self, text: &str) -> String {
        match self.statuses.get(text) {
            Some(en) => (*en).to_string(),
            None => miss(MissKind::Status, text),
        }
    }

    /// Translate a free-text reason with the first matching rule.
    pub fn reason(&self, text: &str) -> String {
        let Some((rule, caps)) = self.reasons.first_match(text) else {
            return miss(MissKind::Reason, text);
        };

        match rule.action() {
            RuleAction::Literal(template) => render(template, |name| {
                caps.name(name).map(|m| Cow::Borrowed(m.as_str()))
            }),
            RuleAction::Nested { template, group } => render(template, |name| {
                let captured = caps.name(name)?.as_str();
                if name == group {
                    Some(Cow::Owned(self.line(captured)))
                } else {
                    Some(Cow::Borrowed(captured))
                }
            }),
        }
    }

    /// True iff the raw status phrase is in the severe set.
    pub fn is_severe(&self, status: &str) -> bool {
        self.severe.contains(status)
    }
}

fn miss(kind: MissKind, text: &str) -> String {
    tracing::debug!(kind = kind.as_str(), text, "translation miss");
    text.to_string()
}
