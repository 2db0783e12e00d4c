//! Contact commands

use crate::output::{cell, truncate, OutputFormat};
use crate::terminal::TerminalPage;
use crate::{ContactArgs, ContactCommands};
use anyhow::{bail, Result};
use colored::Colorize;
use deptsite_client::api::models::ContactMessage;
use deptsite_client::{form, ApiClient, ContactForm, ContactPipeline, FormEvent, PipelineEvent, SubmissionOutcome};
use tabled::Tabled;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "SUBJECT")]
    subject: String,
    #[tabled(rename = "RECEIVED")]
    received: String,
    #[tabled(rename = "MESSAGE")]
    message: String,
}

impl From<&ContactMessage> for ContactRow {
    fn from(m: &ContactMessage) -> Self {
        Self {
            id: m.id,
            name: format!("{} {}", m.first_name, m.last_name),
            email: m.email.clone(),
            subject: m.subject.clone(),
            received: cell(m.created_at.map(|t| t.format("%Y-%m-%d %H:%M"))),
            message: truncate(&m.message, 40),
        }
    }
}

impl ContactArgs {
    fn into_form(self) -> ContactForm {
        let mut form = ContactForm::new();
        form.first_name = self.first_name;
        form.last_name = self.last_name;
        form.email = self.email;
        form.phone = self.phone;
        form.subject = self.subject;
        form.message = self.message;
        form.newsletter = self.newsletter;
        form
    }
}

pub async fn handle(action: ContactCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match action {
        ContactCommands::Send(args) => send(args, client).await,
        ContactCommands::Check(args) => {
            let mut form = args.into_form();
            let result = form::validate_all(&mut form);
            if !result.is_valid {
                let mut page = TerminalPage::stdio();
                page.field_errors(&result);
                bail!("{} field(s) need attention", result.errors.len());
            }
            println!("{} Contact form is valid", "✓".green());
            Ok(())
        }
        ContactCommands::List => {
            let messages = client.list_contacts().await?;
            format.print_list(&messages, |m| ContactRow::from(m))
        }
    }
}

/// Run the form through the same pipeline the web page uses
async fn send(args: ContactArgs, client: &ApiClient) -> Result<()> {
    let mut pipeline = ContactPipeline::new(args.into_form(), TerminalPage::stdio(), client.clone());

    match pipeline.handle(FormEvent::Submit).await {
        PipelineEvent::Invalid(result) => {
            let (_, mut page, _) = pipeline.into_parts();
            page.field_errors(&result);
            bail!("{} field(s) need attention", result.errors.len());
        }
        PipelineEvent::Submitted(outcome) => delivery(&outcome),
        other => bail!("unexpected pipeline state: {other:?}"),
    }
}

/// The visitor saw the success view unless the backend refused the message
fn delivery(outcome: &SubmissionOutcome) -> Result<()> {
    if outcome.shows_success() {
        return Ok(());
    }
    bail!("message was not sent")
}
