//! Token issuance

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{encode, Header};

use crate::claims::Claims;
use crate::error::AuthError;
use crate::keys::KeyPair;
use crate::TOKEN_ALGORITHM;

/// Issues RS256-signed tokens for a subject id.
///
/// The subject is encoded verbatim; an `exp` claim is added only when
/// a TTL is configured.
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<KeyPair>,
    ttl: Option<Duration>,
}

impl TokenIssuer {
    pub fn new(keys: Arc<KeyPair>, ttl: Option<Duration>) -> Self {
        Self { keys, ttl }
    }

    /// Sign a token for the given subject.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let iat = chrono::Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: self.ttl.map(|ttl| iat + ttl.as_secs()),
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, self.keys.encoding()).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            AuthError::SigningFailed
        })
    }
}
