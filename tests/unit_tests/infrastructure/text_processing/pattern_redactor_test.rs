use regex::Regex;

use hushscribe::application::ports::Redactor;
use hushscribe::infrastructure::text_processing::{
    ACCOUNT_LABEL, CARD_LABEL, DOB_LABEL, NRIC_LABEL, PatternRedactor, RedactionRule,
    redact_sensitive,
};

#[test]
fn given_mixed_sensitive_sentence_when_redacting_then_replaces_every_category() {
    let input = "S1234567A called card 4111 1111 1111 1111 on 12/05/1990, account 123456789";
    assert_eq!(
        redact_sensitive(input),
        "[NRIC] called card [CARD] on [DOB], account [ACCOUNT]"
    );
}

#[test]
fn given_text_without_matches_when_redacting_then_returns_unchanged() {
    let inputs = [
        "hello world",
        "call me at 9123 4567",
        "order 12345678 shipped",
        "room 12/05",
        "A1234567B is not an id",
        "",
    ];
    for input in inputs {
        assert_eq!(redact_sensitive(input), input);
    }
}

#[test]
fn given_redacted_text_when_redacting_again_then_is_unchanged() {
    let inputs = [
        "S1234567A called card 4111 1111 1111 1111 on 12/05/1990, account 123456789",
        "T7654321Z and 4111-1111-1111-1111 and 1-2-85",
        "plain words",
        "12345678901234567890",
    ];
    for input in inputs {
        let once = redact_sensitive(input);
        assert_eq!(redact_sensitive(&once), once);
    }
}

#[test]
fn given_each_nric_prefix_when_redacting_then_replaces_with_nric() {
    for prefix in ['S', 'T', 'F', 'G'] {
        let input = format!("id {}1234567X ok", prefix);
        assert_eq!(redact_sensitive(&input), "id [NRIC] ok");
    }
}

#[test]
fn given_nric_shaped_token_with_wrong_case_or_context_when_redacting_then_keeps_it() {
    assert_eq!(redact_sensitive("s1234567A"), "s1234567A");
    assert_eq!(redact_sensitive("S1234567a"), "S1234567a");
    assert_eq!(redact_sensitive("XS1234567AB"), "XS1234567AB");
}

#[test]
fn given_hyphenated_card_number_when_redacting_then_keeps_surrounding_punctuation() {
    assert_eq!(
        redact_sensitive("paid with 4111-1111-1111-1111."),
        "paid with [CARD]."
    );
}

#[test]
fn given_card_digits_followed_by_word_when_redacting_then_keeps_separating_space() {
    assert_eq!(redact_sensitive("4111 1111 1111 1111 on"), "[CARD] on");
}

#[test]
fn given_contiguous_sixteen_digits_when_redacting_then_prefers_card_over_account() {
    assert_eq!(redact_sensitive("4111111111111111"), "[CARD]");
}

#[test]
fn given_thirteen_and_nineteen_digit_runs_when_redacting_then_both_are_cards() {
    assert_eq!(redact_sensitive("1234567890123"), "[CARD]");
    assert_eq!(redact_sensitive("1234567890123456789"), "[CARD]");
}

#[test]
fn given_digit_run_outside_card_range_when_redacting_then_is_account() {
    assert_eq!(redact_sensitive("123456789012"), "[ACCOUNT]");
    assert_eq!(redact_sensitive("12345678901234567890"), "[ACCOUNT]");
}

#[test]
fn given_double_separator_between_digits_when_redacting_then_not_a_card() {
    assert_eq!(
        redact_sensitive("4111  1111  1111  1111"),
        "4111  1111  1111  1111"
    );
}

#[test]
fn given_short_date_forms_when_redacting_then_replaces_with_dob() {
    assert_eq!(redact_sensitive("born 1-2-85"), "born [DOB]");
    assert_eq!(redact_sensitive("born 31/12/2001."), "born [DOB].");
}

#[test]
fn given_date_with_mixed_separators_when_redacting_then_keeps_it() {
    assert_eq!(redact_sensitive("12/05-1990"), "12/05-1990");
}

#[test]
fn given_default_redactor_when_listing_rules_then_order_is_fixed() {
    let redactor = PatternRedactor::default();
    let labels: Vec<&str> = redactor.rules().iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec![NRIC_LABEL, CARD_LABEL, ACCOUNT_LABEL, DOB_LABEL]);
}

#[test]
fn given_repeated_matches_when_redacting_then_reports_hits_per_rule() {
    let redaction = PatternRedactor::default().redact("S1234567A and T7654321Z, account 987654321");

    assert_eq!(redaction.text, "[NRIC] and [NRIC], account [ACCOUNT]");
    assert_eq!(
        redaction.hits,
        vec![
            (NRIC_LABEL, 2),
            (CARD_LABEL, 0),
            (ACCOUNT_LABEL, 1),
            (DOB_LABEL, 0)
        ]
    );
    assert_eq!(redaction.total_hits(), 3);
}

#[test]
fn given_label_with_dollar_sign_when_redacting_then_inserts_it_literally() {
    let rule = RedactionRule::new(Regex::new(r"\d+").unwrap(), "$0");
    let redactor = PatternRedactor::new(vec![rule]);
    assert_eq!(redactor.redact("a 12 b").text, "a $0 b");
}

#[test]
fn given_custom_rules_when_redacting_then_later_rule_sees_earlier_output() {
    let redactor = PatternRedactor::new(vec![
        RedactionRule::new(Regex::new("cat").unwrap(), "dog"),
        RedactionRule::new(Regex::new("dog").unwrap(), "[PET]"),
    ]);
    assert_eq!(redactor.redact("cat").text, "[PET]");
}
