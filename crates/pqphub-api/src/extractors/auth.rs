//! Extractors for the authenticated caller.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use pqphub_auth::{Claims, extract_bearer_token, require_admin};
use pqphub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Decodes the bearer token on the request into verified claims.
fn authenticate(parts: &Parts, state: &AppState) -> Result<Claims, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = extract_bearer_token(header)?;
    Ok(state.jwt_decoder.decode(token)?)
}

/// Any signed-in user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl Deref for AuthUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = authenticate(parts, state)?;
        Ok(Self(claims.into()))
    }
}

/// A signed-in user whose token carries the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl Deref for AdminUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = authenticate(parts, state)?;
        require_admin(&claims)?;
        Ok(Self(claims.into()))
    }
}
