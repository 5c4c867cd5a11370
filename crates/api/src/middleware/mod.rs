//! Request-scoped middleware: application state and the auth extractor

mod auth;

pub use auth::AuthUser;

use std::sync::Arc;
use std::time::Duration;

use signet_auth::{KeyPair, TokenIssuer, TokenVerifier};

/// Application state shared by all handlers
///
/// The key pair is loaded once at startup and read-only thereafter, so
/// cloning the state per request is cheap and lock-free.
#[derive(Clone)]
pub struct AppState {
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    keys: Arc<KeyPair>,
}

impl AppState {
    pub fn new(keys: Arc<KeyPair>, token_ttl: Option<Duration>) -> Self {
        Self {
            issuer: TokenIssuer::new(keys.clone(), token_ttl),
            verifier: TokenVerifier::new(keys.clone()),
            keys,
        }
    }

    /// The raw public key PEM served at `/public`
    pub fn public_pem(&self) -> &str {
        self.keys.public_pem()
    }
}
