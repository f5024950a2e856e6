//! Admin account commands.

use clap::{Args, Subcommand};

use pqphub_core::error::AppError;
use pqphub_service::AdminBootstrap;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an admin account, or promote and reset an existing one
    Create {
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::open_state(config_path).await?;

    match &args.command {
        AdminCommand::Create {
            email,
            password,
            name,
        } => {
            let email = match email {
                Some(e) => e.clone(),
                None => super::prompt_text("Admin email")?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let name = name.clone().unwrap_or_else(|| "Admin".to_string());

            match state
                .auth_service
                .bootstrap_admin(&name, &email, &password)
                .await?
            {
                AdminBootstrap::Created(user) => output::print_success(
                    &format!("Admin '{}' created (id: {})", user.email, user.id),
                    format,
                ),
                AdminBootstrap::Promoted(user) => output::print_success(
                    &format!("Existing user '{}' promoted to admin", user.email),
                    format,
                ),
            }
        }
    }

    Ok(())
}
