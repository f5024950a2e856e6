//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

use pqphub_entity::PaperFilter;
use pqphub_service::{CreatePaper, NewSubject};

/// `POST /api/auth/register`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email/password required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email/password required"))]
    pub password: String,
}

/// `POST /api/auth/login`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email/password required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email/password required"))]
    pub password: String,
}

/// Body for both subject insert routes.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddSubjectRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "grp, year and subject required"))]
    pub grp: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "grp, year and subject required"))]
    pub year: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "grp, year and subject required"))]
    pub subject: String,
}

impl From<AddSubjectRequest> for NewSubject {
    fn from(req: AddSubjectRequest) -> Self {
        Self {
            grp: req.grp,
            year: req.year,
            semester: req.semester,
            subject: req.subject,
        }
    }
}

/// `POST /api/upload/create-paper`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaperRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title, grp, year and subject required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "title, grp, year and subject required"))]
    pub grp: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "title, grp, year and subject required"))]
    pub year: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "title, grp, year and subject required"))]
    pub subject: String,
}

impl From<CreatePaperRequest> for CreatePaper {
    fn from(req: CreatePaperRequest) -> Self {
        Self {
            title: req.title,
            grp: req.grp,
            year: req.year,
            semester: req.semester,
            subject: req.subject,
        }
    }
}

/// Query string of `GET /api/papers`.
///
/// Empty values are ignored. `approved` is true for `1` or `true` and
/// false for any other non-empty value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperQuery {
    pub grp: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub subject: Option<String>,
    pub approved: Option<String>,
}

impl PaperQuery {
    /// Converts the query into a repository filter.
    pub fn into_filter(self) -> PaperFilter {
        PaperFilter {
            grp: non_empty(self.grp),
            year: non_empty(self.year),
            semester: non_empty(self.semester),
            subject: non_empty(self.subject),
            approved: non_empty(self.approved).map(|v| v == "1" || v == "true"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
