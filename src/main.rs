//! PQP Hub server entry point.
//!
//! Loads configuration, initializes logging, and starts the HTTP server.

use pqphub_core::config::AppConfig;
use pqphub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    pqphub_api::init_logging(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `PQPHUB_CONFIG` (default `config/default`) and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("PQPHUB_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    AppConfig::load(&config_path)
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        database = %config.database.path,
        uploads = %config.storage.upload_root,
        "Starting PQP Hub"
    );
    pqphub_api::run_server(config).await
}
