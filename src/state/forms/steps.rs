//! Step definitions for the two-screen booking form

use super::field::Field;
use super::validation::ValidationState;

/// One screen of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: u8,
    pub label: &'static str,
    pub helper: &'static str,
    /// Fields checked before the form may advance past this step
    pub owned_fields: &'static [Field],
    /// Fields rendered on this step, in focus order
    pub visible_fields: &'static [Field],
}

impl Step {
    pub fn owns(&self, field: Field) -> bool {
        self.owned_fields.contains(&field)
    }
}

pub const STEPS: [Step; 2] = [
    Step {
        id: 1,
        label: "Email and request",
        helper: "Where should we send your diagnosis?",
        owned_fields: &[Field::Email],
        visible_fields: &[Field::Email, Field::RequestType],
    },
    Step {
        id: 2,
        label: "Company details",
        helper: "Company, your name and anything you would like to share",
        owned_fields: &[Field::Company, Field::Name, Field::Consent],
        visible_fields: &[Field::Company, Field::Name, Field::Message, Field::Consent],
    },
];

pub const TOTAL_STEPS: u8 = STEPS.len() as u8;

/// Look up a step by its 1-based id
pub fn step(id: u8) -> Option<&'static Step> {
    STEPS.iter().find(|s| s.id == id)
}

/// First step that owns a field with an outstanding error
pub fn first_invalid_step(validation: &ValidationState) -> Option<&'static Step> {
    let invalid = validation.invalid_fields();
    STEPS
        .iter()
        .find(|s| invalid.iter().any(|f| s.owns(*f)))
}
