use super::*;

fn violations(input: SignUpInput) -> Vec<FieldViolation> {
    match validate_sign_up(input) {
        Validation::Valid(_) => Vec::new(),
        Validation::Invalid(violations) => violations,
    }
}

#[test]
fn complete_input_is_valid_and_returned_unchanged() {
    let input = SignUpInput::new("Ana", "ana@example.com", "123456");
    assert_eq!(
        validate_sign_up(input.clone()),
        Validation::Valid(input)
    );
}

#[test]
fn empty_name_is_the_only_violation() {
    let found = violations(SignUpInput::new("", "a@b.com", "123456"));
    assert_eq!(found, vec![FieldViolation::new(FieldName::Name, NAME_REQUIRED)]);
}

#[test]
fn malformed_email_is_the_only_violation() {
    let found = violations(SignUpInput::new("Ana", "bad-email", "123456"));
    assert_eq!(
        found,
        vec![FieldViolation::new(FieldName::Email, EMAIL_INVALID)]
    );
}

#[test]
fn empty_email_reports_required_not_invalid() {
    let found = violations(SignUpInput::new("Ana", "", "123456"));
    assert_eq!(
        found,
        vec![FieldViolation::new(FieldName::Email, EMAIL_REQUIRED)]
    );
}

#[test]
fn five_character_password_is_too_short() {
    let found = violations(SignUpInput::new("Ana", "ana@example.com", "12345"));
    assert_eq!(
        found,
        vec![FieldViolation::new(FieldName::Password, PASSWORD_TOO_SHORT)]
    );
}

#[test]
fn password_length_counts_utf16_units_not_bytes() {
    // six code units, twelve bytes
    assert!(validate_sign_up(SignUpInput::new("Ana", "ana@example.com", "éééééé")).is_valid());
    assert!(!validate_sign_up(SignUpInput::new("Ana", "ana@example.com", "ééééé")).is_valid());
    // three astral chars are six code units
    assert!(validate_sign_up(SignUpInput::new("Ana", "ana@example.com", "😀😀😀")).is_valid());
    assert!(!validate_sign_up(SignUpInput::new("Ana", "ana@example.com", "😀😀")).is_valid());
}

#[test]
fn every_failing_field_is_collected_in_one_pass() {
    let found = violations(SignUpInput::default());
    let fields: Vec<FieldName> = found.iter().map(|violation| violation.field).collect();
    assert_eq!(
        fields,
        vec![FieldName::Name, FieldName::Email, FieldName::Password]
    );
}

#[test]
fn email_syntax_samples() {
    for ok in [
        "a@b.com",
        "first.last+tag@sub.example.org",
        "x_y@host-name.io",
        "josé@example.com",
        "ana@192-168.example.net",
    ] {
        assert!(is_valid_email(ok), "{ok} should be accepted");
    }
    for bad in [
        "bad-email",
        "a@b",
        "@example.com",
        "ana@",
        "ana @example.com",
        "ana@exa mple.com",
        "ana@-example.com",
        "a..b@example.com",
        ".ana@example.com",
        "ana.@example.com",
        "ana@example.123",
        "ana@example.c0",
        "ana@example..com",
    ] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}
