//! Registration, login, and caller info handlers.

use axum::Json;
use axum::extract::State;

use pqphub_core::error::AppError;
use pqphub_service::Registration;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AuthResponse, MeResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    match state
        .auth_service
        .register(&req.name, &req.email, &req.password)
        .await?
    {
        Registration::Created(session) => Ok(Json(session.into())),
        Registration::AlreadyExists => Err(AppError::conflict("Email exists").into()),
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let session = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(session.into()))
}

/// GET /api/auth/me
pub async fn me(AuthUser(ctx): AuthUser) -> Json<MeResponse> {
    Json(ctx.into())
}
