//! Gallery commands

use crate::output::{cell, OutputFormat};
use crate::{GalleryArgs, GalleryCommands};
use anyhow::Result;
use deptsite_client::api::models::{GalleryDraft, GalleryImage};
use deptsite_client::ApiClient;
use tabled::Tabled;

#[derive(Tabled)]
struct GalleryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "CAPTION")]
    caption: String,
    #[tabled(rename = "EVENT DATE")]
    event_date: String,
    #[tabled(rename = "ACTIVE")]
    active: bool,
    #[tabled(rename = "IMAGE")]
    image_url: String,
}

impl From<&GalleryImage> for GalleryRow {
    fn from(g: &GalleryImage) -> Self {
        Self {
            id: g.id,
            caption: g.caption.clone(),
            event_date: cell(g.event_date),
            active: g.is_active,
            image_url: g.image_url.clone(),
        }
    }
}

impl From<GalleryArgs> for GalleryDraft {
    fn from(args: GalleryArgs) -> Self {
        Self {
            image_url: args.image_url,
            caption: args.caption,
            event_date: args.event_date,
            is_active: !args.inactive,
        }
    }
}

pub async fn handle(action: GalleryCommands, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match action {
        GalleryCommands::List { all } => {
            let images = client.list_gallery(all).await?;
            format.print_list(&images, |g| GalleryRow::from(g))?;
        }
        GalleryCommands::Add(args) => {
            let receipt = client.create_gallery_image(&args.into()).await?;
            super::report(&receipt, "Image added");
        }
        GalleryCommands::Update { id, details } => {
            let receipt = client.update_gallery_image(id, &details.into()).await?;
            super::report(&receipt, "Image updated");
        }
        GalleryCommands::Remove { id } => {
            let receipt = client.delete_gallery_image(id).await?;
            super::report(&receipt, "Image removed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_shows_missing_date_as_dash() {
        let image = GalleryImage {
            id: 3,
            image_url: "https://img.example/1.jpg".into(),
            caption: "Hackathon".into(),
            event_date: None,
            is_active: true,
            created_at: None,
        };
        assert_eq!(GalleryRow::from(&image).event_date, "-");

        let dated = GalleryImage { event_date: NaiveDate::from_ymd_opt(2024, 2, 5), ..image };
        assert_eq!(GalleryRow::from(&dated).event_date, "2024-02-05");
    }
}
