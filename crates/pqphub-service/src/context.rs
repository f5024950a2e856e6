//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use pqphub_auth::Claims;
use pqphub_core::types::UserId;
use pqphub_entity::user::UserRole;

/// Who is acting on the current request.
///
/// Built from verified token claims and passed into service methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// Email from the token.
    pub email: String,
    /// Display name from the token.
    pub name: String,
}

impl RequestContext {
    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            role: claims.role,
            email: claims.email,
            name: claims.name,
        }
    }
}
