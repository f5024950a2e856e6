//! Response DTOs.

use serde::Serialize;

use pqphub_core::types::{PaperId, UserId};
use pqphub_entity::user::{UserProfile, UserRole};
use pqphub_entity::{PaperFile, Subject};
use pqphub_service::{AuthSession, RequestContext};

/// Bare `{ "ok": bool }`.
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new(ok: bool) -> Self {
        Self { ok }
    }
}

/// Register and login result.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub ok: bool,
    pub user: UserProfile,
    pub token: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            ok: true,
            user: session.user,
            token: session.token,
        }
    }
}

/// Token claims of the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CallerInfo {
    pub id: UserId,
    pub role: UserRole,
    pub email: String,
    pub name: String,
}

/// `GET /api/auth/me`
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub ok: bool,
    pub user: CallerInfo,
}

impl From<RequestContext> for MeResponse {
    fn from(ctx: RequestContext) -> Self {
        Self {
            ok: true,
            user: CallerInfo {
                id: ctx.user_id,
                role: ctx.role,
                email: ctx.email,
                name: ctx.name,
            },
        }
    }
}

/// A subject was inserted; carries the refreshed catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectAddedResponse {
    pub ok: bool,
    pub subject: Subject,
    pub subjects: Vec<Subject>,
}

/// A subject delete completed; carries the refreshed catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectDeletedResponse {
    pub ok: bool,
    pub message: String,
    pub subjects: Vec<Subject>,
}

/// `POST /api/upload/create-paper`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperCreatedResponse {
    pub ok: bool,
    pub paper_id: PaperId,
}

/// `POST /api/upload/files`
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    /// Number of files stored.
    pub uploaded: usize,
    pub files: Vec<PaperFile>,
}

impl From<Vec<PaperFile>> for UploadResponse {
    fn from(files: Vec<PaperFile>) -> Self {
        Self {
            ok: true,
            uploaded: files.len(),
            files,
        }
    }
}

/// `GET /api/health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub status: &'static str,
    pub version: &'static str,
}
