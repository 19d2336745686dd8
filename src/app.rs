//! Application state and core logic

use crate::config::FlowConfig;
use crate::platform::{is_submit_modifier, is_text_input};
use crate::state::{AppState, Field, Form, FormData, FormStore, RequestType, StepTransition};
use crate::submission::{
    HttpContactClient, Notifier, SubmissionOrchestrator, SubmissionState, SubmitOutcome,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Booking form and its submission lifecycle
    pub form: SubmissionOrchestrator,
    /// Toasts, gauge and status line
    pub state: AppState,
    /// Request type preselected on a fresh form
    default_request_type: RequestType,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FlowConfig) -> Result<Self> {
        let state = AppState::default();
        let notifier: Arc<dyn Notifier> = Arc::new(state.toasts.clone());
        let default_request_type = config.default_request_type();

        let store = FormStore::with_data(FormData {
            request_type: default_request_type,
            ..Default::default()
        });
        let mut form = SubmissionOrchestrator::new(store, notifier)
            .with_banner_duration(config.success_banner_duration());

        if let Some(url) = config.rest_url() {
            let client = HttpContactClient::new(url, config.nonce.clone())?;
            tracing::info!(rest_url = client.rest_url(), "submissions go to contact endpoint");
            form = form.with_endpoint(Arc::new(client));
        } else {
            tracing::info!("no contact endpoint configured, submissions are simulated");
        }

        Ok(Self {
            form,
            state,
            default_request_type,
            quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether the UI should redraw at animation rate
    pub fn is_animating(&self) -> bool {
        self.form.is_submitting() || self.state.gauge.is_animating()
    }

    /// Apply background submission events and advance the gauge
    pub fn tick(&mut self) {
        let was_submitting = self.form.is_submitting();
        if self.form.pump() {
            match self.form.status().clone() {
                SubmissionState::InProgress { progress, .. } => {
                    self.state.gauge.set_target(progress)
                }
                SubmissionState::Success(_) if was_submitting => {
                    self.state.gauge.snap(100);
                    self.state.status_message = None;
                    // The store was reset to empty values
                    self.form.store_mut().data.request_type = self.default_request_type;
                }
                SubmissionState::Idle if was_submitting => {
                    self.state.gauge.snap(0);
                    self.state.status_message = None;
                }
                _ => {}
            }
        }
        self.state.gauge.update();
    }

    /// Validate everything and start the submission
    pub fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Started { request_type } => {
                self.state.gauge.snap(0);
                if let Some(progress) = self.form.status().progress() {
                    self.state.gauge.set_target(progress);
                }
                self.state.status_message = Some(request_type.pending_title().to_string());
            }
            SubmitOutcome::Rejected { invalid, .. } => {
                if let Some(first) = invalid.first() {
                    self.focus_field(*first);
                }
                self.state.status_message = None;
            }
            SubmitOutcome::AlreadySubmitting => {
                self.state.status_message = Some("Already submitting".to_string());
            }
            SubmitOutcome::TornDown => {}
        }
    }

    /// Move keyboard focus to `field` if the active step shows it
    fn focus_field(&mut self, field: Field) {
        let store = self.form.store_mut();
        if let Some(index) = store
            .active_step()
            .visible_fields
            .iter()
            .position(|f| *f == field)
        {
            store.set_active_field(index);
        }
    }

    fn next_step(&mut self) {
        match self.form.store_mut().next_step() {
            StepTransition::Advanced(_) => self.state.status_message = None,
            StepTransition::Blocked(invalid) => {
                if let Some(first) = invalid.first() {
                    self.focus_field(*first);
                }
                self.state.status_message = Some("Please fix the highlighted fields".to_string());
            }
            StepTransition::Locked => {
                self.state.status_message = Some("Submission in progress".to_string());
            }
            StepTransition::NotAdjacent => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Toasts are modal until dismissed
        if self.state.has_toasts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_toast();
            }
            return Ok(());
        }

        let is_submit_key =
            matches!(key.code, KeyCode::Char('s')) && is_submit_modifier(key.modifiers);

        // The form is hidden and frozen until the submission settles
        if self.form.is_submitting() {
            if is_submit_key {
                self.submit();
            } else {
                self.state.status_message = Some("Submission in progress".to_string());
            }
            return Ok(());
        }

        let store = self.form.store_mut();
        let focused = store.focused_field();

        match key.code {
            _ if is_submit_key => self.submit(),
            KeyCode::Tab => store.next_field(),
            KeyCode::BackTab => store.prev_field(),
            KeyCode::Esc => {
                store.go_back();
            }
            KeyCode::Enter if focused.is_multiline() => store.push_char('\n')?,
            KeyCode::Enter => {
                if store.is_last_step() {
                    self.submit();
                } else {
                    self.next_step();
                }
            }
            KeyCode::Char(' ') if !focused.is_text() => store.toggle_focused()?,
            KeyCode::Left | KeyCode::Right if focused == Field::RequestType => {
                store.toggle_focused()?
            }
            KeyCode::Char(c) if is_text_input(key.modifiers) => store.push_char(c)?,
            KeyCode::Backspace => store.pop_char()?,
            _ => {}
        }
        Ok(())
    }

    /// Cancel background work before exit
    pub fn shutdown(&mut self) {
        self.form.teardown();
    }
}
