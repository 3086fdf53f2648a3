//! Sign-up form state: registered fields and inline error display.

use std::{collections::BTreeMap, sync::Mutex};

use shared::domain::FieldName;

use crate::validation::FieldViolation;

/// Inline error text per field. Ordered so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorMap(BTreeMap<FieldName, String>);

impl FieldErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_violations(violations: &[FieldViolation]) -> Self {
        let mut map = BTreeMap::new();
        for violation in violations {
            map.entry(violation.field)
                .or_insert_with(|| violation.message.to_string());
        }
        Self(map)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Whatever displays field errors next to the inputs.
pub trait FormErrorSink: Send + Sync {
    fn set_errors(&self, errors: FieldErrorMap);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIcon {
    User,
    Mail,
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub placeholder: &'static str,
    pub icon: FieldIcon,
    pub kind: InputKind,
}

impl FormField {
    pub fn is_masked(&self) -> bool {
        self.kind == InputKind::Password
    }
}

pub fn sign_up_fields() -> Vec<FormField> {
    vec![
        FormField {
            name: FieldName::Name,
            placeholder: "Name",
            icon: FieldIcon::User,
            kind: InputKind::Text,
        },
        FormField {
            name: FieldName::Email,
            placeholder: "E-mail",
            icon: FieldIcon::Mail,
            kind: InputKind::Text,
        },
        FormField {
            name: FieldName::Password,
            placeholder: "Password",
            icon: FieldIcon::Lock,
            kind: InputKind::Password,
        },
    ]
}

/// In-memory form: the registered fields plus the errors currently shown.
pub struct SignUpForm {
    fields: Vec<FormField>,
    errors: Mutex<FieldErrorMap>,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            fields: sign_up_fields(),
            errors: Mutex::new(FieldErrorMap::new()),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn errors(&self) -> FieldErrorMap {
        self.errors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn error_for(&self, field: FieldName) -> Option<String> {
        self.errors().get(field).map(str::to_string)
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormErrorSink for SignUpForm {
    fn set_errors(&self, errors: FieldErrorMap) {
        *self
            .errors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_three_fields_with_masked_password() {
        let form = SignUpForm::new();
        let names: Vec<FieldName> = form.fields().iter().map(|field| field.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());

        let password = form.field(FieldName::Password).expect("password field");
        assert!(password.is_masked());
        assert_eq!(password.icon, FieldIcon::Lock);
        assert_eq!(form.field(FieldName::Email).expect("email").placeholder, "E-mail");
    }

    #[test]
    fn first_message_per_field_wins() {
        let map = FieldErrorMap::from_violations(&[
            FieldViolation {
                field: FieldName::Email,
                message: "first",
            },
            FieldViolation {
                field: FieldName::Email,
                message: "second",
            },
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(FieldName::Email), Some("first"));
    }

    #[test]
    fn set_errors_replaces_previous_state() {
        let form = SignUpForm::new();
        form.set_errors(FieldErrorMap::from_violations(&[FieldViolation {
            field: FieldName::Name,
            message: "missing",
        }]));
        assert_eq!(form.error_for(FieldName::Name).as_deref(), Some("missing"));

        form.set_errors(FieldErrorMap::new());
        assert!(form.errors().is_empty());
    }
}
