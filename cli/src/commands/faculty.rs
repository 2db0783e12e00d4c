//! Faculty commands

use crate::output::{cell, OutputFormat};
use crate::{FacultyArgs, FacultyCommands};
use anyhow::Result;
use deptsite_client::api::models::{FacultyDraft, FacultyMember};
use deptsite_client::ApiClient;
use tabled::Tabled;

#[derive(Tabled)]
struct FacultyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DESIGNATION")]
    designation: String,
    #[tabled(rename = "SUBJECT")]
    subject: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "HOD")]
    hod: &'static str,
}

impl From<&FacultyMember> for FacultyRow {
    fn from(f: &FacultyMember) -> Self {
        Self {
            id: cell(f.id),
            name: f.name.clone(),
            designation: f.designation.clone(),
            subject: f.subject.clone(),
            email: cell(f.email.as_deref()),
            hod: if f.is_hod { "yes" } else { "" },
        }
    }
}

impl From<FacultyArgs> for FacultyDraft {
    fn from(args: FacultyArgs) -> Self {
        Self {
            name: args.name,
            designation: args.designation,
            subject: args.subject,
            bio: args.bio,
            email: args.email,
            is_hod: args.hod,
        }
    }
}

pub async fn handle(action: FacultyCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match action {
        FacultyCommands::List => {
            let faculty = client.list_faculty().await?;
            format.print_list(&faculty, |f| FacultyRow::from(f))?;
        }
        FacultyCommands::Get { id } => {
            let member = client.get_faculty(id).await?;
            format.print_one(&member, |f| FacultyRow::from(f))?;
            if let (OutputFormat::Table, Some(bio)) = (format, member.bio.as_deref()) {
                println!("{bio}");
            }
        }
        FacultyCommands::Add(args) => {
            let receipt = client.create_faculty(&args.into()).await?;
            super::report(&receipt, "Faculty member added");
        }
        FacultyCommands::Update { id, details } => {
            let receipt = client.update_faculty(id, &details.into()).await?;
            super::report(&receipt, "Faculty member updated");
        }
        FacultyCommands::Remove { id } => {
            let receipt = client.delete_faculty(id).await?;
            super::report(&receipt, "Faculty member removed");
        }
    }
    Ok(())
}
