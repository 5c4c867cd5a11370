//! JWT claims encoded into issued tokens

use serde::{Deserialize, Serialize};

/// Claims payload for a Signet token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier, taken verbatim from the request)
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expires at; absent when the service is configured without a TTL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}
