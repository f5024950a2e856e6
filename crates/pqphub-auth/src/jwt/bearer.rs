//! `Authorization` header parsing.

use pqphub_core::error::AppError;

/// Extract the token from an `Authorization: Bearer <token>` value.
///
/// A missing header, a different scheme, or extra segments all fail with
/// the same authentication error.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| AppError::authentication("No token"))?;
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AppError::authentication("Malformed authorization header")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bearer_scheme() {
        assert_eq!(extract_bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_missing_and_malformed_headers() {
        assert!(extract_bearer_token(None).is_err());
        assert!(extract_bearer_token(Some("Bearer")).is_err());
        assert!(extract_bearer_token(Some("Basic abc")).is_err());
        assert!(extract_bearer_token(Some("Bearer a b")).is_err());
        assert!(extract_bearer_token(Some("abc")).is_err());
    }
}
