//! Built-in subject sets.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use pqphub_core::error::AppError;
use pqphub_core::result::AppResult;

use super::service::NewSubject;

const STARTER: &str = include_str!("../../seeds/starter.json");
const FULL: &str = include_str!("../../seeds/full.json");

/// A bundled list of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSet {
    /// Small catalog inserted into an empty store at startup.
    Starter,
    /// Broader catalog covering more groups and semesters.
    Full,
}

#[derive(Deserialize)]
struct SeedEntry {
    grp: String,
    year: String,
    #[serde(default)]
    semester: String,
    subject: String,
}

impl SeedSet {
    /// Parse the bundled entries.
    pub fn entries(self) -> AppResult<Vec<NewSubject>> {
        let raw = match self {
            Self::Starter => STARTER,
            Self::Full => FULL,
        };
        let entries: Vec<SeedEntry> = serde_json::from_str(raw)?;
        Ok(entries
            .into_iter()
            .map(|e| NewSubject {
                grp: e.grp,
                year: e.year,
                semester: e.semester,
                subject: e.subject,
            })
            .collect())
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedSet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "full" => Ok(Self::Full),
            _ => Err(AppError::validation(format!(
                "Unknown subject set '{s}'. Expected one of: starter, full"
            ))),
        }
    }
}
