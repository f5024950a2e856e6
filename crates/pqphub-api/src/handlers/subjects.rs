//! Subject catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use pqphub_core::error::AppError;
use pqphub_core::types::SubjectId;
use pqphub_entity::Subject;
use pqphub_service::SubjectInsert;

use crate::dto::request::AddSubjectRequest;
use crate::dto::response::{SubjectAddedResponse, SubjectDeletedResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/subjects
pub async fn list_subjects(State(state): State<AppState>) -> ApiResult<Json<Vec<Subject>>> {
    Ok(Json(state.catalog_service.list().await?))
}

/// POST /api/subjects/add
pub async fn add_subject(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(req): ValidatedJson<AddSubjectRequest>,
) -> ApiResult<Json<SubjectAddedResponse>> {
    insert_subject(&state, req).await
}

/// POST /api/admin/subject
pub async fn admin_add_subject(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(req): ValidatedJson<AddSubjectRequest>,
) -> ApiResult<Json<SubjectAddedResponse>> {
    insert_subject(&state, req).await
}

/// POST /api/admin/subject/delete/{id}
///
/// Unknown or malformed ids still answer with the current catalog.
pub async fn admin_delete_subject(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SubjectDeletedResponse>> {
    if let Some(id) = parse_id::<SubjectId>(&id) {
        state.catalog_service.delete(id).await?;
    }
    let subjects = state.catalog_service.list().await?;
    Ok(Json(SubjectDeletedResponse {
        ok: true,
        message: "Subject deleted".to_string(),
        subjects,
    }))
}

async fn insert_subject(state: &AppState, req: AddSubjectRequest) -> ApiResult<Json<SubjectAddedResponse>> {
    match state.catalog_service.add(req.into()).await? {
        SubjectInsert::Inserted(subject) => {
            let subjects = state.catalog_service.list().await?;
            Ok(Json(SubjectAddedResponse {
                ok: true,
                subject,
                subjects,
            }))
        }
        SubjectInsert::AlreadyExists => Err(AppError::conflict("Subject already exists").into()),
    }
}
