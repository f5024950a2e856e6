//! Paper entity model.

use chrono::{DateTime, Utc};
use pqphub_core::types::{PaperId, UserId};
use serde::{Deserialize, Serialize};

use crate::subject::model::{default_semester, semester_or_na};

/// A previous-year question paper submission.
///
/// The classification fields are a copy of the catalog entry at upload
/// time, not a reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Unique paper identifier.
    pub id: PaperId,
    /// Title given by the uploader.
    pub title: String,
    /// Program or category label.
    pub grp: String,
    /// Year label.
    pub year: String,
    /// Semester label, or `NA`.
    #[serde(default = "default_semester", deserialize_with = "semester_or_na")]
    pub semester: String,
    /// Subject name.
    pub subject: String,
    /// Account that created the paper.
    pub uploaded_by: UserId,
    /// Whether a moderator approved the paper. Stored as `0` or `1`.
    #[serde(default, with = "approval_flag")]
    pub approved: bool,
    /// Number of successful file retrievals.
    #[serde(default)]
    pub downloads: u64,
    /// When the paper was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a paper.
#[derive(Debug, Clone)]
pub struct NewPaper {
    /// Title.
    pub title: String,
    /// Program or category label.
    pub grp: String,
    /// Year label.
    pub year: String,
    /// Semester label; blank means `NA`.
    pub semester: String,
    /// Subject name.
    pub subject: String,
    /// Uploading account.
    pub uploaded_by: UserId,
}

impl Paper {
    /// Create a pending paper with zero downloads, timestamped now.
    pub fn new(input: NewPaper) -> Self {
        let semester = input.semester.trim();
        Self {
            id: PaperId::new(),
            title: input.title,
            grp: input.grp,
            year: input.year,
            semester: if semester.is_empty() {
                default_semester()
            } else {
                semester.to_string()
            },
            subject: input.subject,
            uploaded_by: input.uploaded_by,
            approved: false,
            downloads: 0,
            created_at: Utc::now(),
        }
    }
}

/// Serde adapter storing the approval flag as `0`/`1`.
///
/// Reading also accepts JSON booleans so hand-edited documents load.
mod approval_flag {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        struct FlagVisitor;

        impl Visitor<'_> for FlagVisitor {
            type Value = bool;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("0, 1, or a boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
                Ok(v != 0)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
                Ok(v != 0)
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}
