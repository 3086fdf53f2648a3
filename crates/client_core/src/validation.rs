//! Client-side checks run on every sign-up submit.

use std::sync::OnceLock;

use regex::Regex;
use shared::{domain::FieldName, protocol::CreateUserRequest};

pub const PASSWORD_MIN_LEN: usize = 6;

pub const NAME_REQUIRED: &str = "Username is a required field";
pub const EMAIL_REQUIRED: &str = "E-mail is a required field";
pub const EMAIL_INVALID: &str = "Type a valid e-mail";
pub const PASSWORD_TOO_SHORT: &str = "Must have at least 6 characters";

/// Values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn into_request(self) -> CreateUserRequest {
        CreateUserRequest {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: FieldName,
    pub message: &'static str,
}

impl FieldViolation {
    fn new(field: FieldName, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(SignUpInput),
    Invalid(Vec<FieldViolation>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // dot-atom local part; the last domain label starts and ends with a letter
        let atom = r"[\p{L}0-9!#$%&'*+/=?^_`{|}~-]+";
        let label = r"[\p{L}0-9](?:[\p{L}0-9-]{0,61}[\p{L}0-9])?";
        let tld = r"\p{L}(?:[\p{L}0-9-]{0,61}\p{L})?";
        let pattern = format!(r"^{atom}(?:\.{atom})*@(?:{label}\.)+{tld}$");
        Regex::new(&pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Runs every rule and reports all failing fields at once.
///
/// At most one violation is produced per field; the first failing rule for
/// that field wins.
pub fn validate_sign_up(input: SignUpInput) -> Validation {
    let mut violations = Vec::new();

    if input.name.is_empty() {
        violations.push(FieldViolation::new(FieldName::Name, NAME_REQUIRED));
    }

    if input.email.is_empty() {
        violations.push(FieldViolation::new(FieldName::Email, EMAIL_REQUIRED));
    } else if !is_valid_email(&input.email) {
        violations.push(FieldViolation::new(FieldName::Email, EMAIL_INVALID));
    }

    // measured in UTF-16 code units, like the browser-side form
    if input.password.encode_utf16().count() < PASSWORD_MIN_LEN {
        violations.push(FieldViolation::new(FieldName::Password, PASSWORD_TOO_SHORT));
    }

    if violations.is_empty() {
        Validation::Valid(input)
    } else {
        Validation::Invalid(violations)
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
