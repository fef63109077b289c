use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::application::ports::{Redaction, Redactor};

pub const NRIC_LABEL: &str = "[NRIC]";
pub const CARD_LABEL: &str = "[CARD]";
pub const ACCOUNT_LABEL: &str = "[ACCOUNT]";
pub const DOB_LABEL: &str = "[DOB]";

static NRIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[STFG]\d{7}[A-Z]\b").unwrap());

// 13-19 digits, single space or hyphen allowed between digits only.
static CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d(?:[ -]?\d){12,18}\b").unwrap());

static ACCOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{9,}\b").unwrap());

// No backreferences in `regex`, so the same-separator constraint is spelled out.
static DOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}-\d{1,2}-\d{2,4})\b").unwrap()
});

static DEFAULT_REDACTOR: LazyLock<PatternRedactor> = LazyLock::new(PatternRedactor::default);

/// A pattern paired with the literal label that replaces each match.
#[derive(Debug, Clone)]
pub struct RedactionRule {
    label: &'static str,
    pattern: Regex,
}

impl RedactionRule {
    pub fn new(pattern: Regex, label: &'static str) -> Self {
        Self { label, pattern }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        (self.pattern.replace_all(text, NoExpand(self.label)), count)
    }
}

/// NRIC, card, account and date-of-birth rules, in application order.
pub fn default_rules() -> Vec<RedactionRule> {
    vec![
        RedactionRule::new(NRIC.clone(), NRIC_LABEL),
        RedactionRule::new(CARD.clone(), CARD_LABEL),
        RedactionRule::new(ACCOUNT.clone(), ACCOUNT_LABEL),
        RedactionRule::new(DOB.clone(), DOB_LABEL),
    ]
}

/// Applies each rule once, in order, to the output of the previous rule.
#[derive(Debug, Clone)]
pub struct PatternRedactor {
    rules: Vec<RedactionRule>,
}

impl PatternRedactor {
    pub fn new(rules: Vec<RedactionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }
}

impl Default for PatternRedactor {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Redactor for PatternRedactor {
    fn redact(&self, text: &str) -> Redaction {
        let mut current = text.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (replaced, count) = rule.apply(&current);
            if let Cow::Owned(next) = replaced {
                current = next;
            }
            hits.push((rule.label, count));
        }

        Redaction {
            text: current,
            hits,
        }
    }
}

/// Redacts `text` with the default rule set.
pub fn redact_sensitive(text: &str) -> String {
    DEFAULT_REDACTOR.redact(text).text
}
