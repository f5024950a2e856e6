//! Subject catalog commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use pqphub_core::error::AppError;
use pqphub_core::types::SubjectId;
use pqphub_entity::Subject;
use pqphub_service::{NewSubject, SeedSet, SubjectInsert};

use crate::output::{self, OutputFormat};

/// Arguments for subject commands
#[derive(Debug, Args)]
pub struct SubjectArgs {
    /// Subject subcommand
    #[command(subcommand)]
    pub command: SubjectCommand,
}

/// Subject subcommands
#[derive(Debug, Subcommand)]
pub enum SubjectCommand {
    /// List the catalog
    List,
    /// Add one entry
    Add {
        #[arg(long)]
        grp: String,
        #[arg(long)]
        year: String,
        /// Omit for programs without semesters
        #[arg(long, default_value = "")]
        semester: String,
        #[arg(long)]
        subject: String,
    },
    /// Import a bundled seed set, skipping duplicates
    Import {
        /// `starter` or `full`
        #[arg(long, default_value = "full")]
        set: SeedSet,
    },
    /// Delete an entry by id
    Delete {
        id: SubjectId,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct SubjectRow {
    id: String,
    grp: String,
    year: String,
    semester: String,
    subject: String,
}

impl From<Subject> for SubjectRow {
    fn from(s: Subject) -> Self {
        Self {
            id: s.id.to_string(),
            grp: s.grp,
            year: s.year,
            semester: s.semester,
            subject: s.subject,
        }
    }
}

/// Execute subject commands
pub async fn execute(
    args: &SubjectArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::open_state(config_path).await?;
    let catalog = &state.catalog_service;

    match &args.command {
        SubjectCommand::List => {
            let rows: Vec<SubjectRow> = catalog.list().await?.into_iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }
        SubjectCommand::Add {
            grp,
            year,
            semester,
            subject,
        } => {
            let input = NewSubject {
                grp: grp.clone(),
                year: year.clone(),
                semester: semester.clone(),
                subject: subject.clone(),
            };
            match catalog.add(input).await? {
                SubjectInsert::Inserted(s) => {
                    output::print_success(&format!("Subject added (id: {})", s.id), format)
                }
                SubjectInsert::AlreadyExists => output::print_warning("Subject already exists"),
            }
        }
        SubjectCommand::Import { set } => {
            let report = catalog.import(*set).await?;
            output::print_success(
                &format!(
                    "Imported {} subjects from '{set}' ({} already present)",
                    report.inserted, report.skipped
                ),
                format,
            );
        }
        SubjectCommand::Delete { id } => {
            if catalog.delete(*id).await? {
                output::print_success(&format!("Subject {id} deleted"), format);
            } else {
                output::print_warning(&format!("Subject {id} not found"));
            }
        }
    }

    Ok(())
}
