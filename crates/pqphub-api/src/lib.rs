//! # pqphub-api
//!
//! HTTP API layer for PQP Hub built on Axum.
//!
//! Provides all REST endpoints, middleware (request logging, CORS, body
//! limits), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod telemetry;

pub use app::{build_app, build_state, build_state_with, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use telemetry::init_logging;
