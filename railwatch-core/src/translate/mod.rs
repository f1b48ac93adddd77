//! Rule-based translation of status-page text.
//!
//! Three lookups are offered: line names and status phrases come from fixed
//! dictionaries, free-text reasons go through an ordered [`RuleTable`] where
//! the first matching rule wins. Lookups never fail; unmatched text is
//! returned unchanged.

mod lines;
mod rules;
mod statuses;
mod translator;


pub use rules::{REASON_RULES, ReasonRule, RuleAction, RuleSpec, RuleTable};
pub use statuses::{NORMAL, SUSPENDED};
pub use translator::{MissKind, Translator};
