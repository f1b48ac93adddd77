use regex::{Captures, Regex};

/// What a matching reason rule produces.
///
/// Templates use `{group}` placeholders filled from the rule's named capture groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Fill the template with the captured text as-is.
    Literal(&'static str),

    /// Fill the template, but pass `group` through line-name translation first.
    Nested {
        template: &'static str,
        group: &'static str,
    },
}

impl RuleAction {
    pub fn template(&self) -> &'static str {
        match self {
            RuleAction::Literal(template) => template,
            RuleAction::Nested { template, .. } => template,
        }
    }
}

/// Declarative form of a reason rule, before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub action: RuleAction,
}

const fn literal(pattern: &'static str, template: &'static str) -> RuleSpec {
    RuleSpec {
        pattern,
        action: RuleAction::Literal(template),
    }
}

const fn nested(pattern: &'static str, template: &'static str, group: &'static str) -> RuleSpec {
    RuleSpec {
        pattern,
        action: RuleAction::Nested { template, group },
    }
}

/// Canonical reason rules.
///
/// Order is significant: the first matching rule wins, so narrower patterns
/// must stay above broader ones. Every pattern is matched from the start of
/// the detail text.
pub const REASON_RULES: &[RuleSpec] = &[
    literal(r"大雪災害の影響で", "due to heavy snow"),
    literal(r"台風(?P<number>\d+)号の影響で、", "due to typhoon #{number}"),
    literal(r"大雨の影響で、", "due to heavy rain"),
    literal(
        r"(?P<from>\w+)～(?P<to>\w+)駅間で踏切内点検を",
        "due to inspection between {from} and {to}",
    ),
    nested(
        r"(?P<line>\w+線)内で踏切内点検を",
        "due to inspection on the {line}",
        "line",
    ),
    literal(
        r"\d{1,2}:\d{2}頃、(?P<station>\w+)駅で発生し",
        "due to problems near {station} station",
    ),
    literal(
        r"\d{1,2}:\d{2}頃、(?P<from>\w+)～(?P<to>\w+)駅…$",
        "between {from} and {to} station",
    ),
    literal(r"強風の影響で、", "due to strong winds"),
    literal(r"雪の影響で、", "due to snow"),
    nested(
        r"(?P<line>\w+線)内での降雪の影響で",
        "due to snow on the {line}",
        "line",
    ),
    nested(
        r"(?P<line>\w+線)内で発生した人身事故の影響で",
        "due to a personal injury accident on the {line}",
        "line",
    ),
    literal(
        r"(?P<station>\w+)駅で発生した人身事故の影響で",
        "due to a personal injury accident at {station} station",
    ),
    literal(r"線路内への倒木の影響で", "due to a fallen tree on the tracks"),
    literal(
        r"(?P<station>\w+)駅付近での倒木の影響で",
        "due to a fallen tree near {station} station",
    ),
    nested(
        r"(?P<line>\w+線)内での倒木の影響で",
        "due to a fallen tree on the {line}",
        "line",
    ),
    literal(
        r"(?P<station>\w+)駅で信号点検を",
        "due to signal inspection at {station} station",
    ),
    nested(
        r"(?P<line>\w+線)内での架線トラブルの影響で",
        "due to overhead wire trouble on the {line}",
        "line",
    ),
    literal(
        r"(?P<station>\w+)駅での架線トラブルの影響で",
        "due to overhead wire trouble at {station} station",
    ),
    literal(r"除雪作業の影響で", "due to snow removal"),
    literal(r"車両故障の影響で", "due to a vehicle malfunction"),
];

/// A compiled reason rule.
#[derive(Debug)]
pub struct ReasonRule {
    regex: Regex,
    action: RuleAction,
}

impl ReasonRule {
    pub fn action(&self) -> RuleAction {
        self.action
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Ordered, compiled reason rules.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<ReasonRule>,
}

impl RuleTable {
    /// Compile rule specs, preserving their declared order.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self, regex::Error> {
        let rules = specs
            .iter()
            .map(|rule| {
                Ok(ReasonRule {
                    regex: Regex::new(&format!("^(?:{})", rule.pattern))?,
                    action: rule.action,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule, in declared order, that matches `text`.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<(&ReasonRule, Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.regex.captures(text).map(|caps| (rule, caps)))
    }
}

/// Fill `{group}` placeholders in `template`.
///
/// `lookup` resolves a group name to its replacement. Placeholders it cannot
/// resolve, and unbalanced braces, are copied through verbatim.
pub(crate) fn render<'a, F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<std::borrow::Cow<'a, str>>,
{
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
