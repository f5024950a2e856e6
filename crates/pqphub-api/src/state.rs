//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pqphub_auth::JwtDecoder;
use pqphub_core::config::AppConfig;
use pqphub_database::Database;
use pqphub_service::{AuthService, CatalogService, PaperService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Document store handle
    pub db: Database,
    /// Session token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// Subject catalog
    pub catalog_service: Arc<CatalogService>,
    /// Papers, files, and moderation
    pub paper_service: Arc<PaperService>,
}
