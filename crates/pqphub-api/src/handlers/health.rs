//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Reports `degraded` when the document store cannot be read or the
/// upload root is gone.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await.unwrap_or(false);
    let storage = state.paper_service.storage_healthy().await;
    if !storage {
        tracing::warn!("Upload root is not a usable directory");
    }
    let healthy = database && storage;
    Json(HealthResponse {
        ok: true,
        status: if healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
    })
}
