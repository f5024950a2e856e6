//! File download handler.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use pqphub_core::error::AppError;
use pqphub_core::types::FileId;

use crate::error::ApiResult;
use crate::extractors::parse_id;
use crate::state::AppState;

/// GET /api/file/{id}
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id::<FileId>(&id).ok_or_else(|| AppError::not_found("Not found"))?;
    let download = state.paper_service.download(id).await?;

    let disposition = format!(
        "inline; filename=\"{}\"",
        header_safe_filename(&download.file.originalname)
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, &download.file.mimetype)
        .header(header::CONTENT_DISPOSITION, disposition)
        .header(header::CONTENT_LENGTH, download.data.len())
        .body(Body::from(download.data))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")).into())
}

/// Printable ASCII only, without quotes or backslashes.
fn header_safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c == ' ' || c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect()
}
