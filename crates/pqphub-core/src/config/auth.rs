//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Fallback signing secret used when none is configured.
///
/// The server logs a warning at startup while this value is in effect.
pub const DEFAULT_JWT_SECRET: &str = "pqp_hub_secret_change_it";

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: i64,
}

impl AuthConfig {
    /// Whether the signing secret is still the built-in fallback.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl() -> i64 {
    30
}
