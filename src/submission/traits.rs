//! Collaborator seams of the submission flow, mockable in tests

use super::client::{ContactPayload, ContactReceipt, SubmitError};
use super::notification::Notification;
use async_trait::async_trait;

/// Backend that receives a completed form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    /// Deliver the form contents
    async fn submit(&self, payload: &ContactPayload) -> Result<ContactReceipt, SubmitError>;
}

/// Surface that renders toast notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
