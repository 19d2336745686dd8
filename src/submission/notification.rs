//! Toast notifications raised by the submission flow

use crate::state::RequestType;
use std::fmt;

/// How a notification should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

/// A request to show a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn validation_failed() -> Self {
        Self::new(
            "Please check your entries",
            "Required fields and privacy policy consent are needed.",
            Severity::Error,
        )
    }

    pub fn submitted(request_type: RequestType) -> Self {
        match request_type {
            RequestType::Consultation => Self::new(
                "Free diagnosis request received",
                "A representative will send candidate dates shortly, as early as today.",
                Severity::Success,
            ),
            RequestType::Checklist => Self::new(
                "Checklist sent",
                "The AI checklist and templates are on their way to your inbox.",
                Severity::Success,
            ),
        }
    }

    pub fn submit_failed(reason: &impl fmt::Display) -> Self {
        Self::new("Submission failed", reason.to_string(), Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_is_error() {
        let n = Notification::validation_failed();
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.title, "Please check your entries");
    }

    #[test]
    fn test_submitted_varies_by_request_type() {
        let consultation = Notification::submitted(RequestType::Consultation);
        let checklist = Notification::submitted(RequestType::Checklist);
        assert_eq!(consultation.severity, Severity::Success);
        assert_eq!(checklist.title, "Checklist sent");
        assert_ne!(consultation.title, checklist.title);
    }

    #[test]
    fn test_submit_failed_carries_reason() {
        let n = Notification::submit_failed(&"endpoint returned HTTP 500");
        assert_eq!(n.description, "endpoint returned HTTP 500");
        assert_eq!(n.severity, Severity::Error);
    }
}
