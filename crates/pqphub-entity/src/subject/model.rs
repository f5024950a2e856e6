//! Subject catalog entry model.

use pqphub_core::types::SubjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Semester label meaning "not applicable".
pub const SEMESTER_NA: &str = "NA";

/// One entry of the group / year / semester / subject hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: SubjectId,
    /// Program or category label.
    pub grp: String,
    /// Year label.
    pub year: String,
    /// Semester label, or [`SEMESTER_NA`].
    #[serde(default = "default_semester", deserialize_with = "semester_or_na")]
    pub semester: String,
    /// Subject name.
    pub subject: String,
}

impl Subject {
    /// Build a catalog entry with a fresh id.
    ///
    /// A blank semester is stored as [`SEMESTER_NA`].
    pub fn new(
        grp: impl Into<String>,
        year: impl Into<String>,
        semester: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        let semester = semester.into();
        Self {
            id: SubjectId::new(),
            grp: grp.into(),
            year: year.into(),
            semester: if semester.trim().is_empty() {
                default_semester()
            } else {
                semester
            },
            subject: subject.into(),
        }
    }

    /// Normalized identity used for duplicate detection.
    pub fn key(&self) -> SubjectKey {
        SubjectKey::new(&self.grp, &self.year, &self.semester, &self.subject)
    }
}

/// Trimmed, case-folded classification of a subject.
///
/// Two entries with equal keys are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectKey {
    grp: String,
    year: String,
    semester: String,
    subject: String,
}

impl SubjectKey {
    /// Normalize the four classification fields.
    pub fn new(grp: &str, year: &str, semester: &str, subject: &str) -> Self {
        let semester = if semester.trim().is_empty() {
            SEMESTER_NA
        } else {
            semester
        };
        Self {
            grp: normalize(grp),
            year: normalize(year),
            semester: normalize(semester),
            subject: normalize(subject),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) fn default_semester() -> String {
    SEMESTER_NA.to_string()
}

/// Reads a stored semester label, mapping `null` and blank values to
/// [`SEMESTER_NA`].
pub(crate) fn semester_or_na<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default_semester))
}
