//! Paper submission handlers.

use axum::Json;
use axum::extract::{Multipart, State};

use pqphub_core::error::AppError;
use pqphub_core::types::PaperId;
use pqphub_service::UploadedFile;

use crate::dto::request::CreatePaperRequest;
use crate::dto::response::{PaperCreatedResponse, UploadResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// Multipart field carrying the target paper id.
const PAPER_ID_FIELD: &str = "paperId";
/// Multipart field carrying file parts.
const FILES_FIELD: &str = "files";

/// POST /api/upload/create-paper
pub async fn create_paper(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePaperRequest>,
) -> ApiResult<Json<PaperCreatedResponse>> {
    let paper = state.paper_service.create(&ctx, req.into()).await?;
    Ok(Json(PaperCreatedResponse {
        ok: true,
        paper_id: paper.id,
    }))
}

/// POST /api/upload/files
///
/// Reads every part before touching storage, so `paperId` may come
/// before or after the files.
pub async fn upload_files(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut paper_id: Option<String> = None;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            PAPER_ID_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read paperId: {e}")))?;
                paper_id = Some(text.trim().to_string());
            }
            FILES_FIELD => {
                let original_name = field.file_name().unwrap_or("file").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file: {e}")))?;
                files.push(UploadedFile {
                    original_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let paper_id = match paper_id.as_deref() {
        None | Some("") => return Err(AppError::validation("Missing paperId").into()),
        // A value that is not an id cannot name a paper.
        Some(raw) => parse_id::<PaperId>(raw).ok_or_else(|| AppError::not_found("Paper not found"))?,
    };

    let attached = state.paper_service.attach_files(&ctx, paper_id, files).await?;
    Ok(Json(UploadResponse::from(attached)))
}
