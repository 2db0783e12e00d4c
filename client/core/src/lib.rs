//! Department site client
//!
//! Contact form pipeline and HTTP client for the AI & DS department website.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        ContactPipeline                           │
//! │                                                                  │
//! │  FormEvent ──► ┌────────────┐   valid   ┌──────────────────────┐ │
//! │  (blur/input/  │ Validation │ ────────► │  ContactTransport    │ │
//! │   submit)      │ (rules)    │           │  (ApiClient: POST    │ │
//! │                └─────┬──────┘           │   /api/contact)      │ │
//! │                      │                  └──────────┬───────────┘ │
//! │                ┌─────▼──────┐           ┌──────────▼───────────┐ │
//! │                │ FormSurface│           │    PageControls      │ │
//! │                │ (values,   │           │ (loader, success     │ │
//! │                │  errors)   │           │  view, alert, button)│ │
//! │                └────────────┘           └──────────────────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A network failure during submission is shown to the visitor as a
//! successful submission, so a statically hosted page keeps working without
//! a backend. See [`SubmissionOutcome::NetworkUnavailable`].

pub mod api;
pub mod config;
pub mod form;
pub mod logging;
pub mod pipeline;
pub mod submission;

use thiserror::Error;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use form::{ContactForm, ContactSubmission, FieldId, FieldValue, FormSurface, ValidationResult};
pub use pipeline::{ContactPipeline, FormEvent, PageControls, PipelineEvent, TriggerState};
pub use submission::{ContactTransport, SubmissionOutcome};

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// The request never produced a usable response
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Decode(_))
    }
}
