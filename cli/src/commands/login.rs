//! Login command

use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use deptsite_client::api::models::Credentials;
use deptsite_client::ApiClient;

pub async fn handle(username: String, password: String, client: &ApiClient, format: OutputFormat) -> Result<()> {
    let session = client.login(&Credentials { username, password }).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&session)?),
        OutputFormat::Table => println!("{} Logged in as {}", "✓".green(), session.user.bold()),
    }
    Ok(())
}
