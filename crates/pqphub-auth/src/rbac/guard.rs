//! Role checks applied after a token has been verified.

use pqphub_core::error::AppError;

use crate::jwt::Claims;

/// Fails with an authorization error unless the caller is an admin.
pub fn require_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.is_admin() {
        Ok(())
    } else {
        Err(AppError::authorization("Admin only"))
    }
}
