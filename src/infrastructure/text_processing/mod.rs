mod pattern_redactor;

pub use pattern_redactor::{
    ACCOUNT_LABEL, CARD_LABEL, DOB_LABEL, NRIC_LABEL, PatternRedactor, RedactionRule,
    default_rules, redact_sensitive,
};
