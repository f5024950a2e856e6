//! CLI command definitions and dispatch.

pub mod admin;
pub mod papers;
pub mod serve;
pub mod subjects;
pub mod user;

use clap::{Parser, Subcommand};

use pqphub_api::AppState;
use pqphub_core::config::AppConfig;
use pqphub_core::error::AppError;

use crate::output::OutputFormat;

/// PQP Hub: past question paper sharing with moderated uploads
#[derive(Debug, Parser)]
#[command(name = "pqphub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
    /// User management
    User(user::UserArgs),
    /// Subject catalog management
    Subjects(subjects::SubjectArgs),
    /// Paper moderation
    Papers(papers::PaperArgs),
}

impl Cli {
    /// Whether the command logs per the config file's `logging` section.
    pub fn uses_configured_logging(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config, self.format).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
            Commands::Subjects(args) => subjects::execute(args, &self.config, self.format).await,
            Commands::Papers(args) => papers::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open the store and build services without seeding the catalog
pub async fn open_state(config_path: &str) -> Result<AppState, AppError> {
    let mut config = load_config(config_path)?;
    config.catalog.seed_on_startup = false;
    pqphub_api::build_state(config).await
}

/// Helper: prompt for a line of text
fn prompt_text(prompt: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
