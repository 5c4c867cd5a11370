//! Token lifecycle for the Signet service
//!
//! Owns the RSA key pair, issues RS256-signed bearer tokens, and
//! verifies inbound tokens against the public half. The signing
//! algorithm is pinned process-wide; tokens signed any other way
//! (including `alg: none`) are rejected.

mod claims;
mod error;
mod issuer;
mod keys;
mod verifier;

pub use claims::Claims;
pub use error::AuthError;
pub use issuer::TokenIssuer;
pub use keys::{KeyError, KeyPair};
pub use verifier::TokenVerifier;

/// The one signature algorithm this service accepts
pub const TOKEN_ALGORITHM: jsonwebtoken::Algorithm = jsonwebtoken::Algorithm::RS256;
