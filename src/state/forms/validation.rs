//! Field validators
//!
//! Validation is a pure function of [`FormData`]. It is only invoked at
//! transition points (step advance and submit), never on each keystroke.

use super::field::{Field, FormData};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Inline error attached to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("company required")]
    CompanyRequired,
    #[error("name too short")]
    NameTooShort,
    #[error("email required")]
    EmailRequired,
    #[error("email format invalid")]
    EmailFormatInvalid,
    #[error("consent required")]
    ConsentRequired,
}

/// Error per validated key; `None` means valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationState {
    pub company: Option<FieldError>,
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub consent: Option<FieldError>,
}

impl ValidationState {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Company => self.company,
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Consent => self.consent,
            Field::RequestType | Field::Message => None,
        }
    }

    /// Set one slot. Unvalidated fields are ignored.
    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::Company => self.company = error,
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Consent => self.consent = error,
            Field::RequestType | Field::Message => {}
        }
    }

    /// Message shown next to the field, empty when valid
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        Field::VALIDATED.iter().all(|f| self.get(*f).is_none())
    }

    pub fn all_valid(&self, fields: &[Field]) -> bool {
        fields.iter().all(|f| self.get(*f).is_none())
    }

    /// Validated keys that currently carry an error, in declaration order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::VALIDATED
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    /// Copy the given fields from `source`, leaving the others untouched
    pub fn sync_fields(&mut self, fields: &[Field], source: &ValidationState) {
        for field in fields {
            self.set(*field, source.get(*field));
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validate every checked field of the form
pub fn validate(data: &FormData) -> ValidationState {
    let company = data.company.trim();
    let name = data.name.trim();
    let email = data.email.trim();

    ValidationState {
        company: company.is_empty().then_some(FieldError::CompanyRequired),
        name: (name.chars().count() < 2).then_some(FieldError::NameTooShort),
        email: if email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if !is_valid_email(email) {
            Some(FieldError::EmailFormatInvalid)
        } else {
            None
        },
        consent: (!data.consent).then_some(FieldError::ConsentRequired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> FormData {
        FormData {
            company: "Acme".to_string(),
            name: "Yamada Taro".to_string(),
            email: "a@b.co".to_string(),
            consent: true,
            ..Default::default()
        }
    }

    mod validate_fn {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_has_no_errors() {
            let state = validate(&valid_data());
            assert_eq!(state, ValidationState::default());
            assert!(state.is_valid());
        }

        #[test]
        fn test_empty_form_reports_every_key() {
            let state = validate(&FormData::default());
            assert_eq!(state.company, Some(FieldError::CompanyRequired));
            assert_eq!(state.name, Some(FieldError::NameTooShort));
            assert_eq!(state.email, Some(FieldError::EmailRequired));
            assert_eq!(state.consent, Some(FieldError::ConsentRequired));
        }

        #[test]
        fn test_whitespace_company_is_empty() {
            let data = FormData {
                company: "   ".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).company, Some(FieldError::CompanyRequired));
        }

        #[test]
        fn test_name_length_is_measured_after_trim() {
            let data = FormData {
                name: "  A  ".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).name, Some(FieldError::NameTooShort));

            let data = FormData {
                name: " Al ".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).name, None);
        }

        #[test]
        fn test_name_counts_characters_not_bytes() {
            let data = FormData {
                name: "山".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).name, Some(FieldError::NameTooShort));

            let data = FormData {
                name: "山田".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).name, None);
        }

        #[test]
        fn test_whitespace_email_is_required_error() {
            let data = FormData {
                email: "  ".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).email, Some(FieldError::EmailRequired));
        }

        #[test]
        fn test_malformed_email() {
            for email in ["bad", "a@b", "a b@c.d", "@b.co", "a@@b.co", "a@b."] {
                let data = FormData {
                    email: email.to_string(),
                    ..valid_data()
                };
                assert_eq!(
                    validate(&data).email,
                    Some(FieldError::EmailFormatInvalid),
                    "{email}"
                );
            }
        }

        #[test]
        fn test_email_is_trimmed_before_matching() {
            let data = FormData {
                email: "  a@b.co  ".to_string(),
                ..valid_data()
            };
            assert_eq!(validate(&data).email, None);
        }

        #[test]
        fn test_missing_consent_only() {
            let data = FormData {
                consent: false,
                ..valid_data()
            };
            let state = validate(&data);
            assert_eq!(state.invalid_fields(), vec![Field::Consent]);
        }

        #[test]
        fn test_unvalidated_fields_never_error() {
            let data = FormData {
                message: String::new(),
                ..valid_data()
            };
            let state = validate(&data);
            assert!(state.get(Field::Message).is_none());
            assert!(state.get(Field::RequestType).is_none());
        }
    }

    mod validation_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_messages() {
            let state = validate(&FormData {
                email: "bad".to_string(),
                ..Default::default()
            });
            assert_eq!(state.message(Field::Email), "email format invalid");
            assert_eq!(state.message(Field::Company), "company required");
            assert_eq!(state.message(Field::Name), "name too short");
            assert_eq!(state.message(Field::Consent), "consent required");
            assert_eq!(state.message(Field::Message), "");
        }

        #[test]
        fn test_sync_fields_leaves_others() {
            let mut current = ValidationState {
                company: Some(FieldError::CompanyRequired),
                ..Default::default()
            };
            let fresh = validate(&FormData::default());
            current.sync_fields(&[Field::Email], &fresh);
            assert_eq!(current.email, Some(FieldError::EmailRequired));
            assert_eq!(current.company, Some(FieldError::CompanyRequired));
            assert_eq!(current.name, None);
        }

        #[test]
        fn test_set_ignores_unvalidated_fields() {
            let mut state = ValidationState::default();
            state.set(Field::Message, Some(FieldError::NameTooShort));
            assert_eq!(state, ValidationState::default());
        }

        #[test]
        fn test_all_valid_subset() {
            let state = ValidationState {
                consent: Some(FieldError::ConsentRequired),
                ..Default::default()
            };
            assert!(state.all_valid(&[Field::Email]));
            assert!(!state.all_valid(&[Field::Company, Field::Consent]));
        }
    }
}
