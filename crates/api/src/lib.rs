//! HTTP API for the Signet token service

pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use middleware::AppState;
use signet_auth::KeyPair;
use signet_common::Config;

/// Build the router for an already-constructed application state.
pub fn app(state: AppState) -> Router {
    routes::create_routes().with_state(state)
}

/// Create the main application router from configuration.
///
/// Key material is loaded here, once; any failure is fatal and must
/// abort startup since every route depends on the key pair.
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let keys = Arc::new(KeyPair::from_pem_files(
        &config.private_key_path,
        &config.public_key_path,
    )?);

    let token_ttl = config.token_ttl_secs.map(Duration::from_secs);
    let state = AppState::new(keys, token_ttl);

    Ok(app(state))
}
