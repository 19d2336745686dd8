//! Submission flow: progress simulation, timers, endpoint client and the
//! orchestrator that ties them to the form store

mod client;
mod notification;
mod orchestrator;
mod progress;
mod timers;
mod traits;

pub use client::HttpContactClient;
pub use notification::{Notification, Severity};
pub use orchestrator::{SubmissionOrchestrator, SubmissionState, SubmitOutcome, SuccessBanner};
pub use traits::Notifier;
