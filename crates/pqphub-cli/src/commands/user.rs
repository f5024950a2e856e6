//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use pqphub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Give an existing user the admin role
    Promote {
        /// Email of the user
        email: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::open_state(config_path).await?;

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = state
                .auth_service
                .list_users()
                .await?
                .into_iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    name: u.name,
                    email: u.email,
                    role: u.role.to_string(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Promote { email } => {
            if !state.auth_service.promote(email).await? {
                return Err(AppError::not_found(format!("User '{email}' not found")));
            }
            output::print_success(&format!("User '{email}' is now an admin"), format);
        }
    }

    Ok(())
}
