//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the visitor is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    #[default]
    Consultation,
    Checklist,
}

impl RequestType {
    pub const ALL: [RequestType; 2] = [RequestType::Consultation, RequestType::Checklist];

    pub fn next(&self) -> Self {
        match self {
            Self::Consultation => Self::Checklist,
            Self::Checklist => Self::Consultation,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consultation => "consultation",
            Self::Checklist => "checklist",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Consultation => "Book a free management diagnosis",
            Self::Checklist => "Just send me the materials",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Consultation => {
                "A 30-minute AI report demo and review of your management figures. \
                 A representative follows up by email or phone with candidate dates."
            }
            Self::Checklist => {
                "The 18-page guide and Excel template by email right away. \
                 Book the diagnosis whenever you are ready."
            }
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Consultation => "Dedicated scheduling",
            Self::Checklist => "PDF + Excel",
        }
    }

    /// Label for the submit button while this type is selected
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Consultation => "Book free diagnosis",
            Self::Checklist => "Get the checklist",
        }
    }

    pub fn pending_title(&self) -> &'static str {
        match self {
            Self::Consultation => "Arranging candidate dates…",
            Self::Checklist => "Preparing your materials…",
        }
    }

    pub fn pending_description(&self) -> &'static str {
        match self {
            Self::Consultation => {
                "The advisory team is preparing date options and the hearing sheet."
            }
            Self::Checklist => "Generating the checklist and template download links.",
        }
    }

    /// Body of the success banner
    pub fn success_description(&self) -> &'static str {
        match self {
            Self::Consultation => {
                "A representative will email candidate dates for the free 30-minute \
                 diagnosis together with a pre-check sheet."
            }
            Self::Checklist => {
                "The checklist download link and bonus materials are on their way to your inbox."
            }
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every key of [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Company,
    Name,
    Email,
    RequestType,
    Message,
    Consent,
}

impl Field {
    /// Keys covered by the field validators
    pub const VALIDATED: [Field; 4] = [Field::Company, Field::Name, Field::Email, Field::Consent];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Name => "name",
            Self::Email => "email",
            Self::RequestType => "requestType",
            Self::Message => "message",
            Self::Consent => "consent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Name => "Your name",
            Self::Email => "Email",
            Self::RequestType => "What would you like?",
            Self::Message => "Anything to share (optional)",
            Self::Consent => "I agree to the privacy policy",
        }
    }

    pub fn is_validated(&self) -> bool {
        Self::VALIDATED.contains(self)
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Company | Self::Name | Self::Email | Self::Message
        )
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Request(RequestType),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Request(_) => "request type",
            Self::Flag(_) => "flag",
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<RequestType> for FieldValue {
    fn from(value: RequestType) -> Self {
        FieldValue::Request(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Raw values entered into the booking form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub company: String,
    pub name: String,
    pub email: String,
    pub request_type: RequestType,
    pub message: String,
    pub consent: bool,
}

impl FormData {
    /// Get the text value (returns empty string for non-text fields)
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Company => &self.company,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::RequestType | Field::Consent => "",
        }
    }

    /// Current value of a field
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::RequestType => FieldValue::Request(self.request_type),
            Field::Consent => FieldValue::Flag(self.consent),
            text => FieldValue::Text(self.text(text).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod request_type {
        use super::*;

        #[test]
        fn test_default_is_consultation() {
            assert_eq!(RequestType::default(), RequestType::Consultation);
        }

        #[test]
        fn test_next_cycles() {
            assert_eq!(RequestType::Consultation.next(), RequestType::Checklist);
            assert_eq!(RequestType::Checklist.next(), RequestType::Consultation);
        }

        #[test]
        fn test_serializes_lowercase() {
            let json = serde_json::to_string(&RequestType::Checklist).unwrap();
            assert_eq!(json, "\"checklist\"");
        }
    }

    mod field {
        use super::*;

        #[test]
        fn test_validated_keys() {
            assert!(Field::Company.is_validated());
            assert!(Field::Consent.is_validated());
            assert!(!Field::RequestType.is_validated());
            assert!(!Field::Message.is_validated());
        }

        #[test]
        fn test_only_message_is_multiline() {
            assert!(Field::Message.is_multiline());
            assert!(!Field::Company.is_multiline());
        }

        #[test]
        fn test_key_names_match_payload() {
            assert_eq!(Field::RequestType.key(), "requestType");
            assert_eq!(Field::Email.to_string(), "email");
        }
    }

    mod form_data {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let data = FormData::default();
            assert_eq!(data.company, "");
            assert_eq!(data.request_type, RequestType::Consultation);
            assert!(!data.consent);
        }

        #[test]
        fn test_value_per_kind() {
            let data = FormData {
                email: "a@b.co".to_string(),
                consent: true,
                ..Default::default()
            };
            assert_eq!(data.value(Field::Email), FieldValue::Text("a@b.co".into()));
            assert_eq!(data.value(Field::Consent), FieldValue::Flag(true));
            assert_eq!(
                data.value(Field::RequestType),
                FieldValue::Request(RequestType::Consultation)
            );
        }
    }
}
