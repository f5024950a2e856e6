//! Moderation handlers.

use axum::Json;
use axum::extract::{Path, State};

use pqphub_core::types::PaperId;
use pqphub_entity::PaperFilter;
use pqphub_service::PaperView;

use crate::dto::response::OkResponse;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, parse_id};
use crate::state::AppState;

/// GET /api/admin/papers
pub async fn list_papers(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<PaperView>>> {
    let papers = state.paper_service.list(&PaperFilter::default()).await?;
    Ok(Json(papers))
}

/// POST /api/admin/approve/{id}
pub async fn approve_paper(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let ok = match parse_id::<PaperId>(&id) {
        Some(id) => state.paper_service.approve(id).await?,
        None => false,
    };
    tracing::info!(admin = %admin.email, paper_id = %id, ok, "Approve requested");
    Ok(Json(OkResponse::new(ok)))
}

/// POST /api/admin/reject/{id}
pub async fn reject_paper(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let ok = match parse_id::<PaperId>(&id) {
        Some(id) => state.paper_service.reject(id).await?,
        None => false,
    };
    tracing::info!(admin = %admin.email, paper_id = %id, ok, "Reject requested");
    Ok(Json(OkResponse::new(ok)))
}
