//! Token issuance and public-key exposure

use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use signet_auth::AuthError;

use crate::middleware::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Serve the raw public verification key so clients can verify tokens
/// offline.
pub async fn public_key(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, TEXT_PLAIN)],
        state.public_pem().to_string(),
    )
}

/// Mint a signed token for the path-supplied subject id. The id is
/// encoded verbatim; no validation is applied.
pub async fn sign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AuthError> {
    let token = state.issuer.issue(&id)?;
    Ok(([(CONTENT_TYPE, TEXT_PLAIN)], token))
}
