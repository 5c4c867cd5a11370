//! Bearer-token verification for protected endpoints
//!
//! Verification runs as an axum extractor: a protected handler that
//! takes an [`AuthUser`] parameter cannot run unless extraction
//! succeeded, and a rejection is folded into the canonical error
//! envelope by [`AuthError`]'s `IntoResponse`.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};
use signet_auth::{AuthError, Claims};

use crate::middleware::AppState;

/// Decoded claims of an authenticated request
#[derive(Debug)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;

        let claims = state.verifier.verify(&token)?;

        Ok(AuthUser(claims))
    }
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
