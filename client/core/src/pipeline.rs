//! Contact form pipeline
//!
//! Wires form events to validation and submission. The pipeline owns the
//! form surface, the page controls and the transport, and is driven one
//! event at a time.

use crate::form::{self, ContactSubmission, FieldId, FormSurface, ValidationResult};
use crate::logging::MaskedEmail;
use crate::submission::{ContactTransport, SubmissionOutcome};

/// Label shown on the trigger control while a submission is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// State of the control that starts a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerState {
    pub enabled: bool,
    pub label: String,
}

impl TriggerState {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self { enabled: true, label: label.into() }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self { enabled: false, label: label.into() }
    }
}

/// Page-level effects the pipeline triggers
pub trait PageControls {
    fn show_loader(&mut self);
    fn hide_loader(&mut self);
    /// Replace the form with the success view
    fn show_success(&mut self);
    /// Bring the form back, hiding the success view
    fn show_form(&mut self);
    fn is_form_visible(&self) -> bool;
    /// Blocking notification
    fn alert(&mut self, message: &str);
    fn trigger(&self) -> TriggerState;
    fn set_trigger(&mut self, state: TriggerState);
}

/// Input from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A field lost focus
    Blur(FieldId),
    /// The user typed into a field
    Input(FieldId),
    Submit,
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    FieldChecked(ValidationResult),
    FieldCleared(FieldId),
    /// Submission blocked by validation errors
    Invalid(ValidationResult),
    Submitted(SubmissionOutcome),
    /// Submit arrived while the trigger control was disabled
    Ignored,
}

/// Contact form pipeline
pub struct ContactPipeline<S, P, T> {
    surface: S,
    page: P,
    transport: T,
    /// Trigger state to restore once a hidden form is shown again
    parked_trigger: Option<TriggerState>,
}

impl<S, P, T> ContactPipeline<S, P, T>
where
    S: FormSurface,
    P: PageControls,
    T: ContactTransport,
{
    pub fn new(surface: S, page: P, transport: T) -> Self {
        Self { surface, page, transport, parked_trigger: None }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_parts(self) -> (S, P, T) {
        (self.surface, self.page, self.transport)
    }

    /// Dispatch one form event
    pub async fn handle(&mut self, event: FormEvent) -> PipelineEvent {
        match event {
            FormEvent::Blur(id) => PipelineEvent::FieldChecked(self.on_blur(id)),
            FormEvent::Input(id) => {
                self.on_input(id);
                PipelineEvent::FieldCleared(id)
            }
            FormEvent::Submit => self.submit().await,
        }
    }

    /// Real-time check of a single field
    pub fn on_blur(&mut self, id: FieldId) -> ValidationResult {
        form::validate_field(&mut self.surface, id)
    }

    pub fn on_input(&mut self, id: FieldId) {
        form::clear_field(&mut self.surface, id);
    }

    /// Validate the whole form and, if it passes, send it.
    ///
    /// The trigger control is disabled while the request is in flight and
    /// restored afterwards whenever the form is still visible.
    pub async fn submit(&mut self) -> PipelineEvent {
        let original = self.page.trigger();
        if !original.enabled {
            tracing::debug!("Submit ignored while a submission is in flight");
            return PipelineEvent::Ignored;
        }

        let validation = form::validate_all(&mut self.surface);
        if !validation.is_valid {
            return PipelineEvent::Invalid(validation);
        }

        self.page.set_trigger(TriggerState::disabled(SENDING_LABEL));
        self.page.show_loader();

        let outcome = {
            let payload = ContactSubmission::from_surface(&self.surface);
            tracing::info!(
                email = %MaskedEmail::new(&payload.email),
                subject = %payload.subject,
                newsletter = payload.newsletter,
                "Submitting contact form"
            );
            self.transport.submit(&payload).await
        };

        self.page.hide_loader();
        match &outcome {
            SubmissionOutcome::Success => {
                tracing::info!("Contact form submitted");
                self.page.show_success();
            }
            SubmissionOutcome::NetworkUnavailable => {
                tracing::warn!("Backend unreachable, showing success view anyway");
                self.page.show_success();
            }
            SubmissionOutcome::ServerRejected(reason) => {
                tracing::warn!(reason = %reason, "Contact form rejected by backend");
                self.page.alert(&format!("Error: {reason}"));
            }
        }

        if self.page.is_form_visible() {
            self.page.set_trigger(original);
        } else {
            self.parked_trigger = Some(original);
        }

        PipelineEvent::Submitted(outcome)
    }

    /// Start over with an empty form, as after "send another message"
    pub fn reset(&mut self) {
        self.surface.reset();
        self.page.show_form();
        if let Some(trigger) = self.parked_trigger.take() {
            self.page.set_trigger(trigger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ContactForm;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum PageAction {
        ShowLoader,
        HideLoader,
        ShowSuccess,
        ShowForm,
        Alert(String),
        SetTrigger(TriggerState),
    }

    struct RecordingPage {
        actions: Vec<PageAction>,
        form_visible: bool,
        trigger: TriggerState,
    }

    impl RecordingPage {
        fn new() -> Self {
            Self {
                actions: Vec::new(),
                form_visible: true,
                trigger: TriggerState::enabled("Send Message"),
            }
        }

        fn alerts(&self) -> Vec<&str> {
            self.actions
                .iter()
                .filter_map(|a| match a {
                    PageAction::Alert(msg) => Some(msg.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl PageControls for RecordingPage {
        fn show_loader(&mut self) {
            self.actions.push(PageAction::ShowLoader);
        }
        fn hide_loader(&mut self) {
            self.actions.push(PageAction::HideLoader);
        }
        fn show_success(&mut self) {
            self.form_visible = false;
            self.actions.push(PageAction::ShowSuccess);
        }
        fn show_form(&mut self) {
            self.form_visible = true;
            self.actions.push(PageAction::ShowForm);
        }
        fn is_form_visible(&self) -> bool {
            self.form_visible
        }
        fn alert(&mut self, message: &str) {
            self.actions.push(PageAction::Alert(message.to_string()));
        }
        fn trigger(&self) -> TriggerState {
            self.trigger.clone()
        }
        fn set_trigger(&mut self, state: TriggerState) {
            self.trigger = state.clone();
            self.actions.push(PageAction::SetTrigger(state));
        }
    }

    struct StubTransport {
        outcome: SubmissionOutcome,
        calls: Mutex<Vec<ContactSubmission>>,
    }

    impl StubTransport {
        fn answering(outcome: SubmissionOutcome) -> Arc<Self> {
            Arc::new(Self { outcome, calls: Mutex::new(Vec::new()) })
        }

        fn calls(&self) -> Vec<ContactSubmission> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContactTransport for StubTransport {
        async fn submit(&self, submission: &ContactSubmission) -> SubmissionOutcome {
            self.calls.lock().unwrap().push(submission.clone());
            self.outcome.clone()
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(FieldId::FirstName, "John");
        form.set_value(FieldId::LastName, "Doe");
        form.set_value(FieldId::Email, "john@example.com");
        form.set_value(FieldId::Phone, "");
        form.set_value(FieldId::Subject, "admission");
        form.set_value(FieldId::Message, "I want to know about admissions");
        form.set_value(FieldId::Newsletter, true);
        form
    }

    fn expected_payload() -> ContactSubmission {
        ContactSubmission {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            phone: String::new(),
            subject: "admission".into(),
            message: "I want to know about admissions".into(),
            newsletter: true,
        }
    }

    #[tokio::test]
    async fn test_valid_submission_shows_success_view() {
        let transport = StubTransport::answering(SubmissionOutcome::Success);
        let mut pipeline = ContactPipeline::new(filled_form(), RecordingPage::new(), transport.clone());

        let event = pipeline.handle(FormEvent::Submit).await;

        assert_eq!(event, PipelineEvent::Submitted(SubmissionOutcome::Success));
        assert_eq!(transport.calls(), vec![expected_payload()]);

        let page = pipeline.page();
        assert!(!page.is_form_visible());
        assert_eq!(
            page.actions,
            vec![
                PageAction::SetTrigger(TriggerState::disabled(SENDING_LABEL)),
                PageAction::ShowLoader,
                PageAction::HideLoader,
                PageAction::ShowSuccess,
            ]
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_masked_as_success() {
        let transport = StubTransport::answering(SubmissionOutcome::NetworkUnavailable);
        let mut pipeline = ContactPipeline::new(filled_form(), RecordingPage::new(), transport.clone());

        let event = pipeline.submit().await;

        assert_eq!(event, PipelineEvent::Submitted(SubmissionOutcome::NetworkUnavailable));
        assert!(!pipeline.page().is_form_visible());
        assert!(pipeline.page().alerts().is_empty());
        assert!(pipeline.page().actions.contains(&PageAction::ShowSuccess));
        assert!(pipeline.page().actions.contains(&PageAction::HideLoader));
    }

    #[tokio::test]
    async fn test_server_rejection_alerts_and_restores_trigger() {
        let transport = StubTransport::answering(SubmissionOutcome::ServerRejected("Duplicate".into()));
        let mut pipeline = ContactPipeline::new(filled_form(), RecordingPage::new(), transport.clone());

        pipeline.submit().await;

        let page = pipeline.page();
        assert!(page.is_form_visible());
        assert_eq!(page.alerts().len(), 1);
        assert!(page.alerts()[0].contains("Duplicate"));
        assert_eq!(page.trigger(), TriggerState::enabled("Send Message"));
        assert!(!page.actions.contains(&PageAction::ShowSuccess));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let transport = StubTransport::answering(SubmissionOutcome::Success);
        let mut form = filled_form();
        form.set_value(FieldId::Email, "a@b");
        let mut pipeline = ContactPipeline::new(form, RecordingPage::new(), transport.clone());

        let event = pipeline.submit().await;

        let result = match event {
            PipelineEvent::Invalid(result) => result,
            other => panic!("expected validation failure, got {other:?}"),
        };
        assert_eq!(result.error(FieldId::Email), Some("Please enter a valid email address"));
        assert!(pipeline.surface().is_invalid(FieldId::Email));
        assert!(transport.calls().is_empty());
        assert!(pipeline.page().actions.is_empty());
    }

    #[tokio::test]
    async fn test_submit_ignored_while_trigger_disabled() {
        let transport = StubTransport::answering(SubmissionOutcome::Success);
        let mut page = RecordingPage::new();
        page.trigger = TriggerState::disabled(SENDING_LABEL);
        let mut pipeline = ContactPipeline::new(filled_form(), page, transport.clone());

        assert_eq!(pipeline.submit().await, PipelineEvent::Ignored);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blur_and_input_events() {
        let transport = StubTransport::answering(SubmissionOutcome::Success);
        let mut form = filled_form();
        form.set_value(FieldId::FirstName, "J");
        let mut pipeline = ContactPipeline::new(form, RecordingPage::new(), transport);

        let event = pipeline.handle(FormEvent::Blur(FieldId::FirstName)).await;
        let result = match event {
            PipelineEvent::FieldChecked(result) => result,
            other => panic!("expected field check, got {other:?}"),
        };
        assert!(!result.is_valid);
        assert_eq!(pipeline.surface().error(FieldId::FirstName), Some("Please enter a valid first name"));

        let event = pipeline.handle(FormEvent::Input(FieldId::FirstName)).await;
        assert_eq!(event, PipelineEvent::FieldCleared(FieldId::FirstName));
        assert_eq!(pipeline.surface().error(FieldId::FirstName), None);
    }

    #[tokio::test]
    async fn test_reset_brings_back_an_empty_form() {
        let transport = StubTransport::answering(SubmissionOutcome::Success);
        let mut pipeline = ContactPipeline::new(filled_form(), RecordingPage::new(), transport);

        pipeline.submit().await;
        assert!(!pipeline.page().is_form_visible());

        assert_eq!(pipeline.page().trigger(), TriggerState::disabled(SENDING_LABEL));

        pipeline.reset();
        assert!(pipeline.page().is_form_visible());
        assert_eq!(pipeline.page().trigger(), TriggerState::enabled("Send Message"));
        assert_eq!(pipeline.surface(), &ContactForm::new());
    }
}
