//! Department site CLI
//!
//! Command-line front end for the department website backend.
//!
//! # Usage
//!
//! ```bash
//! deptsite contact send --first-name Jo --last-name Li --email jo@li.io \
//!     --subject admission --message "When do admissions open?"
//! deptsite faculty list --format json
//! deptsite gallery list --all
//! deptsite config set api_url https://cs.college.edu
//! ```

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;
mod terminal;

#[derive(Parser)]
#[command(name = "deptsite")]
#[command(version)]
#[command(about = "Department website command line interface", long_about = None)]
struct Cli {
    /// Site API base URL [default: profile value, then http://localhost:5000]
    #[arg(long, env = "DEPTSITE_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Output format [default: profile value, then table]
    #[arg(long, short, global = true)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send or inspect contact form messages
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
    /// Manage faculty members
    Faculty {
        #[command(subcommand)]
        action: FacultyCommands,
    },
    /// Manage department achievements
    Achievements {
        #[command(subcommand)]
        action: AchievementCommands,
    },
    /// Manage gallery images
    Gallery {
        #[command(subcommand)]
        action: GalleryCommands,
    },
    /// Check staff credentials
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "DEPTSITE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Contact form fields. Missing values are reported by the form validator.
#[derive(Args, Debug, Clone, Default)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// Subject option value, e.g. admission, academics, general
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Subscribe to the department newsletter
    #[arg(long)]
    newsletter: bool,
}

#[derive(Subcommand)]
enum ContactCommands {
    /// Validate and send a message
    Send(ContactArgs),
    /// Validate a message without sending it
    Check(ContactArgs),
    /// List received messages
    List,
}

#[derive(Args, Debug, Clone)]
struct FacultyArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    designation: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Mark as head of department
    #[arg(long)]
    hod: bool,
}

#[derive(Subcommand)]
enum FacultyCommands {
    /// List faculty, head of department first
    List,
    /// Get faculty member details
    Get { id: i64 },
    /// Add a faculty member
    Add(FacultyArgs),
    /// Replace a faculty member's details
    Update {
        id: i64,
        #[command(flatten)]
        details: FacultyArgs,
    },
    /// Remove a faculty member
    Remove { id: i64 },
}

#[derive(Args, Debug, Clone)]
struct AchievementArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    icon: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Store without publishing
    #[arg(long)]
    inactive: bool,
}

#[derive(Subcommand)]
enum AchievementCommands {
    /// List achievements
    List {
        /// Include inactive entries
        #[arg(long)]
        all: bool,
    },
    /// Add an achievement
    Add(AchievementArgs),
    /// Replace an achievement
    Update {
        id: i64,
        #[command(flatten)]
        details: AchievementArgs,
    },
    /// Remove an achievement
    Remove { id: i64 },
}

#[derive(Args, Debug, Clone)]
struct GalleryArgs {
    #[arg(long)]
    image_url: String,
    #[arg(long)]
    caption: String,
    /// Event date as YYYY-MM-DD
    #[arg(long)]
    event_date: Option<chrono::NaiveDate>,
    /// Store without publishing
    #[arg(long)]
    inactive: bool,
}

#[derive(Subcommand)]
enum GalleryCommands {
    /// List gallery images
    List {
        /// Include inactive entries
        #[arg(long)]
        all: bool,
    },
    /// Add an image
    Add(GalleryArgs),
    /// Replace an image's details
    Update {
        id: i64,
        #[command(flatten)]
        details: GalleryArgs,
    },
    /// Remove an image
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = config::Config::load(cli.profile.as_deref());
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level().to_string())
        .unwrap_or_else(|_| config::DEFAULT_LOG_LEVEL.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(log_level),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring unreadable profile, using defaults");
        config::Config::default()
    });

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: config::Config) -> anyhow::Result<()> {
    let Cli { api_url, timeout, format, profile, command } = cli;
    let format = format
        .or_else(|| config.output_format())
        .unwrap_or(output::OutputFormat::Table);
    let connect = || -> anyhow::Result<deptsite_client::ApiClient> {
        let client = deptsite_client::ApiClient::new(&config.client_config(api_url.as_deref(), timeout))?;
        tracing::debug!(base_url = client.base_url(), "Using site API");
        Ok(client)
    };

    match command {
        Commands::Contact { action } => commands::contact::handle(action, &connect()?, format).await,
        Commands::Faculty { action } => commands::faculty::handle(action, &connect()?, format).await,
        Commands::Achievements { action } => commands::achievements::handle(action, &connect()?, format).await,
        Commands::Gallery { action } => commands::gallery::handle(action, &connect()?, format).await,
        Commands::Login { username, password } => {
            commands::login::handle(username, password, &connect()?, format).await
        }
        Commands::Config { action } => commands::config::handle(action, profile.as_deref()),
    }
}
