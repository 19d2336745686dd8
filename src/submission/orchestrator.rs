//! Submission orchestrator
//!
//! Coordinates full-form validation, the progress simulation (plus the
//! contact endpoint when one is configured), success signalling and the
//! reset back to an empty form.
//!
//! All state lives on the orchestrator and is only changed from the owning
//! task: background timers report back through a channel that
//! [`SubmissionOrchestrator::pump`] drains.

use super::client::{ContactPayload, SubmitError};
use super::notification::Notification;
use super::progress::{ProgressSimulator, SimulationOutcome, INITIAL_PROGRESS};
use super::timers::TimerSet;
use super::traits::{ContactEndpoint, Notifier};
use crate::state::{validate, Field, FormStore, RequestType};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long the success banner stays up
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_millis(7000);

/// Success banner shown after a completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    pub request_type: RequestType,
    pub shown_at: DateTime<Local>,
    generation: u64,
}

impl SuccessBanner {
    pub fn description(&self) -> &'static str {
        self.request_type.success_description()
    }
}

/// Where the submission lifecycle currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InProgress {
        request_type: RequestType,
        progress: u8,
    },
    /// Idle, with the success banner still displayed
    Success(SuccessBanner),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    pub fn progress(&self) -> Option<u8> {
        match self {
            Self::InProgress { progress, .. } => Some(*progress),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<&SuccessBanner> {
        match self {
            Self::Success(banner) => Some(banner),
            _ => None,
        }
    }
}

/// What a call to [`SubmissionOrchestrator::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submission is running
    Started { request_type: RequestType },
    /// Validation failed; the form now shows `step`
    Rejected { step: u8, invalid: Vec<Field> },
    /// A submission is already running
    AlreadySubmitting,
    /// The orchestrator has been torn down
    TornDown,
}

#[derive(Debug)]
enum SubmissionEvent {
    Progress {
        run: u64,
        percent: u8,
    },
    Finished {
        run: u64,
        result: Result<(), SubmitError>,
    },
    BannerExpired {
        generation: u64,
    },
}

/// Owner of one booking form and its submission lifecycle
pub struct SubmissionOrchestrator {
    store: FormStore,
    status: SubmissionState,
    simulator: ProgressSimulator,
    timers: TimerSet,
    endpoint: Option<Arc<dyn ContactEndpoint>>,
    notifier: Arc<dyn Notifier>,
    events_tx: mpsc::UnboundedSender<SubmissionEvent>,
    events_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    banner_duration: Duration,
    run: u64,
    banner_generation: u64,
    disposed: bool,
}

impl SubmissionOrchestrator {
    pub fn new(store: FormStore, notifier: Arc<dyn Notifier>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            store,
            status: SubmissionState::Idle,
            simulator: ProgressSimulator::new(),
            timers: TimerSet::new(),
            endpoint: None,
            notifier,
            events_tx,
            events_rx,
            banner_duration: SUCCESS_BANNER_DURATION,
            run: 0,
            banner_generation: 0,
            disposed: false,
        }
    }

    /// Deliver submissions to a real backend alongside the progress display
    pub fn with_endpoint(mut self, endpoint: Arc<dyn ContactEndpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_banner_duration(mut self, duration: Duration) -> Self {
        self.banner_duration = duration;
        self
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    pub fn status(&self) -> &SubmissionState {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    #[cfg(test)]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn has_endpoint(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Background tasks still pending
    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Validate the whole form and, if valid, start submitting it
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.disposed {
            return SubmitOutcome::TornDown;
        }
        if self.status.is_submitting() {
            return SubmitOutcome::AlreadySubmitting;
        }

        let validation = validate(&self.store.data);
        self.store.apply_validation(validation);

        if !validation.is_valid() {
            let invalid = validation.invalid_fields();
            let step = FormStore::first_invalid_step(&validation)
                .unwrap_or_else(|| self.store.current_step());
            self.store.show_step(step);
            tracing::info!(step, ?invalid, "submission rejected by validation");
            self.notifier.notify(Notification::validation_failed());
            return SubmitOutcome::Rejected { step, invalid };
        }

        let request_type = self.store.data.request_type;
        let payload = ContactPayload::from(&self.store.data);

        self.run += 1;
        let run = self.run;
        self.status = SubmissionState::InProgress {
            request_type,
            progress: INITIAL_PROGRESS,
        };
        self.store.set_locked(true);

        let progress_tx = self.events_tx.clone();
        let completion = self.simulator.start(move |percent| {
            let _ = progress_tx.send(SubmissionEvent::Progress { run, percent });
        });

        let endpoint = self.endpoint.clone();
        let finished_tx = self.events_tx.clone();
        self.timers.spawn(async move {
            let (outcome, result) = match endpoint {
                Some(endpoint) => {
                    let delivery = async { endpoint.submit(&payload).await.map(|_| ()) };
                    tokio::join!(completion, delivery)
                }
                None => (completion.await, Ok(())),
            };
            if outcome == SimulationOutcome::Cancelled {
                return;
            }
            let _ = finished_tx.send(SubmissionEvent::Finished { run, result });
        });

        tracing::info!(run, %request_type, "submission started");
        SubmitOutcome::Started { request_type }
    }

    /// Apply everything the background tasks reported since the last call.
    ///
    /// Returns true when any state changed.
    pub fn pump(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    fn apply(&mut self, event: SubmissionEvent) -> bool {
        match event {
            SubmissionEvent::Progress { run, percent } => {
                if run != self.run {
                    return false;
                }
                match &mut self.status {
                    SubmissionState::InProgress { progress, .. } if percent > *progress => {
                        *progress = percent.min(100);
                        true
                    }
                    _ => false,
                }
            }
            SubmissionEvent::Finished { run, result } => {
                if run != self.run {
                    return false;
                }
                let SubmissionState::InProgress { request_type, .. } = &self.status else {
                    return false;
                };
                let request_type = *request_type;
                match result {
                    Ok(()) => self.complete(request_type),
                    Err(err) => self.fail(err),
                }
                true
            }
            SubmissionEvent::BannerExpired { generation } => match &self.status {
                SubmissionState::Success(banner) if banner.generation == generation => {
                    tracing::debug!("success banner cleared");
                    self.status = SubmissionState::Idle;
                    true
                }
                _ => false,
            },
        }
    }

    fn complete(&mut self, request_type: RequestType) {
        self.store.set_locked(false);
        self.notifier.notify(Notification::submitted(request_type));

        self.banner_generation += 1;
        let generation = self.banner_generation;
        self.status = SubmissionState::Success(SuccessBanner {
            request_type,
            shown_at: Local::now(),
            generation,
        });
        self.store.reset();

        let tx = self.events_tx.clone();
        self.timers.spawn_after(self.banner_duration, async move {
            let _ = tx.send(SubmissionEvent::BannerExpired { generation });
        });
        tracing::info!(run = self.run, %request_type, "submission completed");
    }

    fn fail(&mut self, err: SubmitError) {
        tracing::warn!(run = self.run, error = %err, "submission failed");
        self.store.set_locked(false);
        self.status = SubmissionState::Idle;
        self.notifier.notify(Notification::submit_failed(&err));
    }

    /// Stop every pending timer. Nothing changes after this returns.
    pub fn teardown(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        let pending = self.timers.pending();
        self.simulator.cancel();
        self.timers.abort_all();
        self.events_rx.close();
        tracing::debug!(pending, "submission orchestrator torn down");
    }
}

impl Drop for SubmissionOrchestrator {
    fn drop(&mut self) {
        self.teardown();
    }
}
