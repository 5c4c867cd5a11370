//! Route definitions for the Signet API

use axum::{routing::get, Router};
use signet_common::ApiError;

use crate::{handlers, middleware::AppState};

/// Create all API routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/users", get(handlers::pages::users))
        .route("/my-profile", get(handlers::pages::my_profile))
        .route("/public", get(handlers::tokens::public_key))
        .route("/sign/{id}", get(handlers::tokens::sign))
        .fallback(not_found)
}

/// Catch-all for unmatched paths; normalized to the canonical envelope
async fn not_found() -> ApiError {
    ApiError::NotFound
}
