//! Achievements commands

use crate::output::{truncate, OutputFormat};
use crate::{AchievementArgs, AchievementCommands};
use anyhow::Result;
use deptsite_client::api::models::{Achievement, AchievementDraft};
use deptsite_client::ApiClient;
use tabled::Tabled;

#[derive(Tabled)]
struct AchievementRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "ACTIVE")]
    active: bool,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl From<&Achievement> for AchievementRow {
    fn from(a: &Achievement) -> Self {
        Self {
            id: a.id,
            title: format!("{} {}", a.icon, a.title).trim().to_string(),
            category: a.category.clone(),
            active: a.is_active,
            description: truncate(&a.description, 50),
        }
    }
}

impl From<AchievementArgs> for AchievementDraft {
    fn from(args: AchievementArgs) -> Self {
        Self {
            icon: args.icon,
            title: args.title,
            description: args.description,
            category: args.category,
            is_active: !args.inactive,
        }
    }
}

pub async fn handle(action: AchievementCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match action {
        AchievementCommands::List { all } => {
            let achievements = client.list_achievements(all).await?;
            format.print_list(&achievements, |a| AchievementRow::from(a))?;
        }
        AchievementCommands::Add(args) => {
            let receipt = client.create_achievement(&args.into()).await?;
            super::report(&receipt, "Achievement added");
        }
        AchievementCommands::Update { id, details } => {
            let receipt = client.update_achievement(id, &details.into()).await?;
            super::report(&receipt, "Achievement updated");
        }
        AchievementCommands::Remove { id } => {
            let receipt = client.delete_achievement(id).await?;
            super::report(&receipt, "Achievement removed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_prefixes_icon() {
        let achievement = Achievement {
            id: 2,
            icon: "🏆".into(),
            title: "Smart India Hackathon Winners".into(),
            description: "Final-year team won the national round".into(),
            category: "Competition".into(),
            is_active: true,
            created_at: None,
        };
        assert_eq!(AchievementRow::from(&achievement).title, "🏆 Smart India Hackathon Winners");

        let plain = Achievement { icon: String::new(), ..achievement };
        assert_eq!(AchievementRow::from(&plain).title, "Smart India Hackathon Winners");
    }

    #[test]
    fn test_inactive_flag_unpublishes_draft() {
        let draft: AchievementDraft = AchievementArgs {
            title: "Best Paper Award".into(),
            description: "Awarded at the national AI symposium".into(),
            icon: None,
            category: Some("Research".into()),
            inactive: true,
        }
        .into();

        assert!(!draft.is_active);
        assert!(draft.validate().is_ok());
        assert_eq!(draft.category.as_deref(), Some("Research"));
    }
}
