//! Informational pages and the protected profile endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use signet_common::Result;

use crate::middleware::AuthUser;

pub async fn home() -> &'static str {
    "Home Page"
}

pub async fn users() -> &'static str {
    "Users Page!"
}

/// Protected endpoint; the `AuthUser` extractor rejects the request
/// before this body runs unless a valid token was presented.
pub async fn my_profile(AuthUser(claims): AuthUser) -> Result<Response> {
    // Defense-in-depth: a verified token always carries a subject, but
    // an empty one must not be treated as authenticated
    if claims.sub.is_empty() {
        return Ok(StatusCode::FORBIDDEN.into_response());
    }

    let rendered = serde_json::to_string(&claims).map_err(|e| anyhow::anyhow!(e))?;
    Ok(format!("Users Page! {rendered}").into_response())
}
