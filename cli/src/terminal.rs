//! Terminal page
//!
//! Renders the contact pipeline's page effects as lines of text.

use colored::Colorize;
use deptsite_client::{FieldId, PageControls, TriggerState, ValidationResult};
use std::io::{self, Stderr, Stdout, Write};

pub const SEND_LABEL: &str = "Send Message";
pub const SUCCESS_TEXT: &str = "Message sent. Thank you for contacting the department, we will get back to you soon.";

/// Page effects written to a pair of streams
pub struct TerminalPage<W: Write, E: Write> {
    out: W,
    err: E,
    form_visible: bool,
    trigger: TriggerState,
}

impl TerminalPage<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TerminalPage<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            form_visible: true,
            trigger: TriggerState::enabled(SEND_LABEL),
        }
    }

    /// Print each invalid field with its message
    pub fn field_errors(&mut self, result: &ValidationResult) {
        for id in FieldId::ALL {
            if let Some(message) = result.error(id) {
                let _ = writeln!(self.err, "  {} {}: {}", "✗".red(), id.label().bold(), message);
            }
        }
    }

    pub fn into_streams(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> PageControls for TerminalPage<W, E> {
    fn show_loader(&mut self) {
        let _ = writeln!(self.err, "{}", self.trigger.label.dimmed());
    }

    fn hide_loader(&mut self) {}

    fn show_success(&mut self) {
        self.form_visible = false;
        let _ = writeln!(self.out, "{} {}", "✓".green().bold(), SUCCESS_TEXT);
    }

    fn show_form(&mut self) {
        self.form_visible = true;
    }

    fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.err, "{}", message.red().bold());
    }

    fn trigger(&self) -> TriggerState {
        self.trigger.clone()
    }

    fn set_trigger(&mut self, state: TriggerState) {
        self.trigger = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deptsite_client::{ContactForm, FormSurface};

    fn page() -> TerminalPage<Vec<u8>, Vec<u8>> {
        colored::control::set_override(false);
        TerminalPage::new(Vec::new(), Vec::new())
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_success_hides_form() {
        let mut page = page();
        page.show_success();
        assert!(!page.is_form_visible());

        page.show_form();
        assert!(page.is_form_visible());

        let (out, err) = page.into_streams();
        assert!(text(out).contains(SUCCESS_TEXT));
        assert!(err.is_empty());
    }

    #[test]
    fn test_alert_goes_to_stderr() {
        let mut page = page();
        page.alert("Error: Duplicate");
        let (out, err) = page.into_streams();
        assert!(out.is_empty());
        assert_eq!(text(err), "Error: Duplicate\n");
    }

    #[test]
    fn test_field_errors_listed_in_form_order() {
        let mut form = ContactForm::new();
        form.first_name = "Jo".into();
        form.last_name = "Li".into();
        let result = deptsite_client::form::validate_all(&mut form);
        assert!(form.is_invalid(FieldId::Email));

        let mut page = page();
        page.field_errors(&result);
        let (_, err) = page.into_streams();
        let err = text(err);

        let email = err.find("Email address:").unwrap();
        let message = err.find("Message:").unwrap();
        assert!(email < message);
        assert!(!err.contains("First name"));
        form.reset();
        assert_eq!(form.errors().count(), 0);
    }

    #[test]
    fn test_loader_shows_trigger_label() {
        let mut page = page();
        assert_eq!(page.trigger(), TriggerState::enabled(SEND_LABEL));
        page.set_trigger(TriggerState::disabled("Sending..."));
        page.show_loader();
        page.hide_loader();
        assert!(!page.trigger().enabled);

        let (out, err) = page.into_streams();
        assert!(out.is_empty());
        assert_eq!(text(err), "Sending...\n");
    }
}
