//! Paper list filters.

use serde::{Deserialize, Serialize};

use super::model::Paper;

/// Conjunctive exact-match filter over paper classification and approval.
///
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperFilter {
    /// Program or category label.
    pub grp: Option<String>,
    /// Year label.
    pub year: Option<String>,
    /// Semester label.
    pub semester: Option<String>,
    /// Subject name.
    pub subject: Option<String>,
    /// Approval state.
    pub approved: Option<bool>,
}

impl PaperFilter {
    /// Only approved papers.
    pub fn approved() -> Self {
        Self {
            approved: Some(true),
            ..Self::default()
        }
    }

    /// Only papers awaiting moderation.
    pub fn pending() -> Self {
        Self {
            approved: Some(false),
            ..Self::default()
        }
    }

    /// Whether the paper satisfies every set criterion.
    pub fn matches(&self, paper: &Paper) -> bool {
        field_matches(&self.grp, &paper.grp)
            && field_matches(&self.year, &paper.year)
            && field_matches(&self.semester, &paper.semester)
            && field_matches(&self.subject, &paper.subject)
            && self.approved.is_none_or(|flag| flag == paper.approved)
    }
}

fn field_matches(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().is_none_or(|value| value == actual)
}
