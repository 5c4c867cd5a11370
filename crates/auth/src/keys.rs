//! RSA key pair loading and ownership
//!
//! The key pair is loaded exactly once at process start and is
//! immutable for the process lifetime. Issuer and verifier hold shared
//! references; nothing mutates the material after construction.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header};

use crate::claims::Claims;
use crate::verifier;
use crate::TOKEN_ALGORITHM;

/// Failure to load or pair key material; fatal at startup
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("failed to read key file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid RSA key material: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),

    #[error("public key PEM is not valid UTF-8")]
    InvalidPemEncoding,

    #[error("private and public keys are not a matching pair")]
    Unpaired,
}

/// The process-wide RSA key pair
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    public_pem: String,
}

impl KeyPair {
    /// Load a key pair from PEM files, verifying the halves are paired.
    pub fn from_pem_files(private_path: &str, public_path: &str) -> Result<Self, KeyError> {
        let private_pem = std::fs::read(private_path).map_err(|source| KeyError::Io {
            path: private_path.to_string(),
            source,
        })?;
        let public_pem = std::fs::read(public_path).map_err(|source| KeyError::Io {
            path: public_path.to_string(),
            source,
        })?;

        Self::from_pem(&private_pem, &public_pem)
    }

    /// Build a key pair from in-memory PEM text.
    pub fn from_pem(private_pem: &[u8], public_pem: &[u8]) -> Result<Self, KeyError> {
        let encoding = EncodingKey::from_rsa_pem(private_pem)?;
        let decoding = DecodingKey::from_rsa_pem(public_pem)?;
        let public_pem = String::from_utf8(public_pem.to_vec())
            .map_err(|_| KeyError::InvalidPemEncoding)?;

        let pair = Self {
            encoding,
            decoding,
            public_pem,
        };
        pair.verify_pairing()?;

        Ok(pair)
    }

    /// Sign a probe token with the private half and verify it with the
    /// public half. Catches mismatched key files at startup instead of
    /// at first request.
    fn verify_pairing(&self) -> Result<(), KeyError> {
        let probe = Claims {
            sub: "pairing-probe".to_string(),
            iat: chrono::Utc::now().timestamp() as u64,
            exp: None,
        };
        let token = encode(&Header::new(TOKEN_ALGORITHM), &probe, &self.encoding)?;

        decode::<Claims>(&token, &self.decoding, &verifier::validation())
            .map_err(|_| KeyError::Unpaired)?;

        Ok(())
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }

    /// The raw public key PEM, served to clients for offline verification
    pub fn public_pem(&self) -> &str {
        &self.public_pem
    }
}
