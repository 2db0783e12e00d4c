//! Contact submission transport

use crate::{ApiClient, ClientError, ContactSubmission};
use async_trait::async_trait;

/// Result of sending the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend stored the message
    Success,
    /// The backend answered `success: false`
    ServerRejected(String),
    /// No usable response: connection, DNS, timeout or an unreadable body.
    ///
    /// Shown to the visitor exactly like [`SubmissionOutcome::Success`] so the
    /// page keeps working when it is served without a backend.
    NetworkUnavailable,
}

impl SubmissionOutcome {
    /// Whether the visitor is shown the success view
    pub fn shows_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success | SubmissionOutcome::NetworkUnavailable)
    }
}

/// Sends a validated contact payload somewhere
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Deliver the payload. Never fails: every failure is folded into the outcome.
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionOutcome;
}

#[async_trait]
impl ContactTransport for ApiClient {
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionOutcome {
        match self.submit_contact(submission).await {
            Ok(_) => SubmissionOutcome::Success,
            Err(ClientError::Rejected { message, .. }) | Err(ClientError::NotFound(message)) => {
                SubmissionOutcome::ServerRejected(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact submission did not reach the backend");
                SubmissionOutcome::NetworkUnavailable
            }
        }
    }
}

#[async_trait]
impl<T: ContactTransport + ?Sized> ContactTransport for std::sync::Arc<T> {
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionOutcome {
        (**self).submit(submission).await
    }
}
