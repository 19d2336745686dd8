//! Form state store
//!
//! Holds the field values, the displayed inline errors and the current step.
//! Only one store exists per form instance; the submission orchestrator is the
//! only other writer.

use super::field::{Field, FieldValue, FormData};
use super::steps::{self, Step, STEPS, TOTAL_STEPS};
use super::validation::{validate, ValidationState};
use thiserror::Error;

/// Misuse of the store API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{field}` does not accept a {got} value (expected {expected})")]
    ValueKindMismatch {
        field: Field,
        expected: &'static str,
        got: &'static str,
    },
    #[error("the form is locked while a submission is in progress")]
    Locked,
}

/// Result of a forward navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTransition {
    /// Moved to the given step
    Advanced(u8),
    /// Owned fields of the current step carry errors
    Blocked(Vec<Field>),
    /// Target is not the step right after the current one
    NotAdjacent,
    /// A submission is in progress
    Locked,
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The booking form's single source of truth
#[derive(Debug, Clone)]
pub struct FormStore {
    pub data: FormData,
    pub errors: ValidationState,
    current_step: u8,
    active_field_index: usize,
    locked: bool,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            data: FormData::default(),
            errors: ValidationState::default(),
            current_step: 1,
            active_field_index: 0,
            locked: false,
        }
    }

    /// Create a store with prefilled values
    pub fn with_data(data: FormData) -> Self {
        Self {
            data,
            ..Self::new()
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn active_step(&self) -> &'static Step {
        steps::step(self.current_step).unwrap_or(&STEPS[0])
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == TOTAL_STEPS
    }

    /// Step indicator value
    pub fn step_progress_percent(&self) -> u8 {
        ((f32::from(self.current_step) / f32::from(TOTAL_STEPS)) * 100.0).round() as u8
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Field that currently has keyboard focus
    pub fn focused_field(&self) -> Field {
        let fields = self.active_step().visible_fields;
        fields[self.active_field_index.min(fields.len() - 1)]
    }

    /// Set a field and clear that field's displayed error, if any.
    ///
    /// Other fields keep their errors until the next validation pass.
    /// Refused while a submission is in progress.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        if self.locked {
            return Err(FormError::Locked);
        }
        let value = value.into();
        match (field, value) {
            (Field::Company, FieldValue::Text(v)) => self.data.company = v,
            (Field::Name, FieldValue::Text(v)) => self.data.name = v,
            (Field::Email, FieldValue::Text(v)) => self.data.email = v,
            (Field::Message, FieldValue::Text(v)) => self.data.message = v,
            (Field::RequestType, FieldValue::Request(v)) => self.data.request_type = v,
            (Field::Consent, FieldValue::Flag(v)) => self.data.consent = v,
            (field, value) => {
                return Err(FormError::ValueKindMismatch {
                    field,
                    expected: self.data.value(field).kind(),
                    got: value.kind(),
                })
            }
        }
        if self.errors.get(field).is_some() {
            self.errors.set(field, None);
        }
        Ok(())
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) -> Result<(), FormError> {
        let field = self.focused_field();
        if self.locked || !field.is_text() {
            return Ok(());
        }
        let mut text = self.data.text(field).to_string();
        text.push(c);
        self.update_field(field, text)
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(&mut self) -> Result<(), FormError> {
        let field = self.focused_field();
        if self.locked || !field.is_text() {
            return Ok(());
        }
        let mut text = self.data.text(field).to_string();
        if text.pop().is_none() {
            return Ok(());
        }
        self.update_field(field, text)
    }

    /// Toggle consent or cycle the request type when focused
    pub fn toggle_focused(&mut self) -> Result<(), FormError> {
        if self.locked {
            return Ok(());
        }
        match self.focused_field() {
            Field::Consent => self.update_field(Field::Consent, !self.data.consent),
            Field::RequestType => {
                self.update_field(Field::RequestType, self.data.request_type.next())
            }
            _ => Ok(()),
        }
    }

    /// Validate the active step and advance to `target` when allowed
    pub fn go_to_step(&mut self, target: u8) -> StepTransition {
        if self.locked {
            return StepTransition::Locked;
        }

        let validation = validate(&self.data);
        let owned = self.active_step().owned_fields;
        self.errors.sync_fields(owned, &validation);

        if !self.errors.all_valid(owned) {
            let invalid = owned
                .iter()
                .copied()
                .filter(|f| self.errors.get(*f).is_some())
                .collect::<Vec<_>>();
            tracing::debug!(step = self.current_step, ?invalid, "step advance blocked");
            return StepTransition::Blocked(invalid);
        }

        if target != self.current_step + 1 || target > TOTAL_STEPS {
            return StepTransition::NotAdjacent;
        }

        self.show_step(target);
        tracing::debug!(step = target, "step advanced");
        StepTransition::Advanced(target)
    }

    /// Advance to the step after the current one
    pub fn next_step(&mut self) -> StepTransition {
        self.go_to_step(self.current_step + 1)
    }

    /// Move one step back without validating. Returns true if the step changed.
    pub fn go_back(&mut self) -> bool {
        if self.locked || self.current_step <= 1 {
            return false;
        }
        self.show_step(self.current_step - 1);
        true
    }

    /// Jump to a step without any validation (clamped to the valid range)
    pub(crate) fn show_step(&mut self, id: u8) {
        self.current_step = id.clamp(1, TOTAL_STEPS);
        self.active_field_index = 0;
    }

    /// Replace all displayed errors at once
    pub(crate) fn apply_validation(&mut self, validation: ValidationState) {
        self.errors = validation;
    }

    /// Restore defaults: empty values, no errors, first step
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors = ValidationState::default();
        self.show_step(1);
    }

    /// Step that owns the first invalid field of `validation`
    pub fn first_invalid_step(validation: &ValidationState) -> Option<u8> {
        steps::first_invalid_step(validation).map(|s| s.id)
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FormStore {
    fn field_count(&self) -> usize {
        self.active_step().visible_fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}
