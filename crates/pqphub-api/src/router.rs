//! Route definitions for the PQP Hub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit, and request logging.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(subject_routes())
        .merge(admin_routes())
        .merge(upload_routes())
        .merge(paper_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, login, caller info
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Public catalog plus user-submitted entries
fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/subjects", get(handlers::subjects::list_subjects))
        .route("/subjects/add", post(handlers::subjects::add_subject))
}

/// Admin-only moderation and catalog management
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/papers", get(handlers::admin::list_papers))
        .route("/admin/approve/{id}", post(handlers::admin::approve_paper))
        .route("/admin/reject/{id}", post(handlers::admin::reject_paper))
        .route("/admin/subject", post(handlers::subjects::admin_add_subject))
        .route(
            "/admin/subject/delete/{id}",
            post(handlers::subjects::admin_delete_subject),
        )
}

/// Paper submission
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload/create-paper", post(handlers::upload::create_paper))
        .route("/upload/files", post(handlers::upload::upload_files))
}

/// Public listing and downloads
fn paper_routes() -> Router<AppState> {
    Router::new()
        .route("/papers", get(handlers::papers::list_papers))
        .route("/papers/{id}/files", get(handlers::papers::paper_files))
        .route("/file/{id}", get(handlers::files::download_file))
        .route("/most-downloaded", get(handlers::papers::most_downloaded))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
