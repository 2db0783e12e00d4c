//! Output formatting

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name as stored in a profile file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    /// Render a list of records. `row` maps a record to its table row.
    pub fn render_list<T, R, F>(&self, items: &[T], row: F) -> Result<String>
    where
        T: Serialize,
        R: Tabled,
        F: Fn(&T) -> R,
    {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(items)?),
            OutputFormat::Table if items.is_empty() => Ok("(none)".to_string()),
            OutputFormat::Table => {
                let mut table = Table::new(items.iter().map(row));
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Render a single record; tables show it as a one-row list
    pub fn render_one<T, R, F>(&self, item: &T, row: F) -> Result<String>
    where
        T: Serialize,
        R: Tabled,
        F: Fn(&T) -> R,
    {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(item)?),
            OutputFormat::Table => {
                let mut table = Table::new([row(item)]);
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    pub fn print_list<T, R, F>(&self, items: &[T], row: F) -> Result<()>
    where
        T: Serialize,
        R: Tabled,
        F: Fn(&T) -> R,
    {
        println!("{}", self.render_list(items, row)?);
        Ok(())
    }

    pub fn print_one<T, R, F>(&self, item: &T, row: F) -> Result<()>
    where
        T: Serialize,
        R: Tabled,
        F: Fn(&T) -> R,
    {
        println!("{}", self.render_one(item, row)?);
        Ok(())
    }
}

/// Empty cell for optional values
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

/// Shorten long free text for table cells
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}
