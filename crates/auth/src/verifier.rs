//! Token verification

use std::sync::Arc;

use jsonwebtoken::{decode, Validation};

use crate::claims::Claims;
use crate::error::AuthError;
use crate::keys::KeyPair;
use crate::TOKEN_ALGORITHM;

/// Verifies tokens against the public half of the key pair.
///
/// Only the pinned algorithm is accepted; tokens signed with anything
/// else, including `alg: none`, fail verification.
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Arc<KeyPair>,
}

impl TokenVerifier {
    pub fn new(keys: Arc<KeyPair>) -> Self {
        Self { keys }
    }

    /// Verify a token's signature and decode its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, self.keys.decoding(), &validation()).map_err(|e| {
                tracing::debug!(error = %e, "token verification failed");
                AuthError::InvalidToken
            })?;

        Ok(token_data.claims)
    }
}

/// Validation settings for the pinned algorithm: `sub` is required,
/// `exp` is checked when present but tokens without one are accepted.
pub(crate) fn validation() -> Validation {
    let mut validation = Validation::new(TOKEN_ALGORITHM);
    validation.set_required_spec_claims(&["sub"]);
    validation.validate_aud = false;
    validation
}
