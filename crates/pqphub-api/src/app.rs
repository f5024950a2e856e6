//! Application builder: wires state, router, and middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use pqphub_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use pqphub_core::config::AppConfig;
use pqphub_core::error::AppError;
use pqphub_core::result::AppResult;
use pqphub_database::Database;
use pqphub_database::repositories::{
    FileRepository, PaperRepository, SubjectRepository, UserRepository,
};
use pqphub_service::{AuthService, CatalogService, PaperService};
use pqphub_storage::LocalUploadStore;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Opens the configured document store and builds application state.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let db = Database::open(&config.database);
    build_state_with(config, db).await
}

/// Builds application state on top of an already opened store.
///
/// Seeds the subject catalog when it is empty and seeding is enabled.
pub async fn build_state_with(config: AppConfig, db: Database) -> AppResult<AppState> {
    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the built-in default; set PQPHUB__AUTH__JWT_SECRET");
    }

    let uploads = LocalUploadStore::from_config(&config.storage).await?;

    let user_repo = UserRepository::new(db.clone());
    let subject_repo = SubjectRepository::new(db.clone());
    let paper_repo = PaperRepository::new(db.clone());
    let file_repo = FileRepository::new(db.clone());

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        password_hasher,
        jwt_encoder,
    ));
    let catalog_service = Arc::new(CatalogService::new(subject_repo));
    let paper_service = Arc::new(PaperService::new(
        paper_repo,
        file_repo,
        user_repo,
        uploads,
        &config.storage,
    ));

    if config.catalog.seed_on_startup {
        let seeded = catalog_service.seed_if_empty().await?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded subject catalog");
        }
    }

    Ok(AppState {
        config: Arc::new(config),
        db,
        jwt_decoder,
        auth_service,
        catalog_service,
        paper_service,
    })
}

/// Runs the PQP Hub server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting PQP Hub server...");

    let addr = config.server.bind_addr();
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("PQP Hub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("PQP Hub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
