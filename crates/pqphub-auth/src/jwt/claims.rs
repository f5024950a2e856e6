//! Claims carried by every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pqphub_core::types::UserId;
use pqphub_entity::user::{User, UserRole};

/// Session token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id.
    pub id: UserId,
    /// Role at issuance.
    pub role: UserRole,
    /// Email at issuance.
    pub email: String,
    /// Display name at issuance.
    #[serde(default)]
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Claims for `user`, valid from `issued_at` until `expires_at`.
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            role: user.role,
            email: user.email.clone(),
            name: user.name.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Whether the token grants admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
