//! Public paper listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use pqphub_core::types::PaperId;
use pqphub_entity::{Paper, PaperFile};
use pqphub_service::PaperView;

use crate::dto::request::PaperQuery;
use crate::error::ApiResult;
use crate::extractors::parse_id;
use crate::state::AppState;

/// GET /api/papers
pub async fn list_papers(
    State(state): State<AppState>,
    Query(query): Query<PaperQuery>,
) -> ApiResult<Json<Vec<PaperView>>> {
    let papers = state.paper_service.list(&query.into_filter()).await?;
    Ok(Json(papers))
}

/// GET /api/papers/{id}/files
pub async fn paper_files(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<PaperFile>>> {
    let files = match parse_id::<PaperId>(&id) {
        Some(id) => state.paper_service.files(id).await?,
        None => Vec::new(),
    };
    Ok(Json(files))
}

/// GET /api/most-downloaded
pub async fn most_downloaded(State(state): State<AppState>) -> ApiResult<Json<Vec<Paper>>> {
    Ok(Json(state.paper_service.most_downloaded().await?))
}
