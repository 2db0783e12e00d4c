//! CLI Commands

pub mod achievements;
pub mod config;
pub mod contact;
pub mod faculty;
pub mod gallery;
pub mod login;

use colored::Colorize;
use deptsite_client::api::models::WriteReceipt;

/// Confirmation line for a write endpoint
pub(crate) fn report(receipt: &WriteReceipt, fallback: &str) {
    let message = receipt.message.as_deref().unwrap_or(fallback);
    match receipt.id {
        Some(id) => println!("{} {} (id {})", "✓".green(), message, id),
        None => println!("{} {}", "✓".green(), message),
    }
}
