//! Paper moderation commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use pqphub_core::error::AppError;
use pqphub_core::types::PaperId;
use pqphub_entity::{Paper, PaperFilter};

use crate::output::{self, OutputFormat};

/// Arguments for paper commands
#[derive(Debug, Args)]
pub struct PaperArgs {
    /// Paper subcommand
    #[command(subcommand)]
    pub command: PaperCommand,
}

/// Paper subcommands
#[derive(Debug, Subcommand)]
pub enum PaperCommand {
    /// List papers, newest first
    List {
        /// Only papers awaiting approval
        #[arg(long)]
        pending: bool,
    },
    /// Approve a pending paper
    Approve { id: PaperId },
    /// Reject a paper, removing it and its files
    Reject { id: PaperId },
    /// Most downloaded papers
    Top,
}

#[derive(Debug, Serialize, Tabled)]
struct PaperRow {
    id: String,
    title: String,
    grp: String,
    year: String,
    semester: String,
    subject: String,
    approved: bool,
    downloads: u64,
    uploader: String,
}

impl PaperRow {
    fn new(paper: Paper, uploader: String) -> Self {
        Self {
            id: paper.id.to_string(),
            title: paper.title,
            grp: paper.grp,
            year: paper.year,
            semester: paper.semester,
            subject: paper.subject,
            approved: paper.approved,
            downloads: paper.downloads,
            uploader,
        }
    }
}

/// Execute paper commands
pub async fn execute(
    args: &PaperArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::open_state(config_path).await?;
    let papers = &state.paper_service;

    match &args.command {
        PaperCommand::List { pending } => {
            let filter = if *pending {
                PaperFilter::pending()
            } else {
                PaperFilter::default()
            };
            let rows: Vec<PaperRow> = papers
                .list(&filter)
                .await?
                .into_iter()
                .map(|v| PaperRow::new(v.paper, v.uploader))
                .collect();
            output::print_list(&rows, format);
        }
        PaperCommand::Approve { id } => {
            if !papers.approve(*id).await? {
                return Err(AppError::not_found(format!("Paper {id} not found")));
            }
            output::print_success(&format!("Paper {id} approved"), format);
        }
        PaperCommand::Reject { id } => {
            if !papers.reject(*id).await? {
                return Err(AppError::not_found(format!("Paper {id} not found")));
            }
            output::print_success(&format!("Paper {id} rejected"), format);
        }
        PaperCommand::Top => {
            let rows: Vec<PaperRow> = papers
                .most_downloaded()
                .await?
                .into_iter()
                .map(|p| {
                    let uploader = p.uploaded_by.to_string();
                    PaperRow::new(p, uploader)
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
