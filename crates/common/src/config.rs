//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. A `.env` file is loaded
//! first if present; `DOTENV_PATH` overrides its location.

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the RSA private key PEM used for signing
    pub private_key_path: String,

    /// Path to the paired RSA public key PEM used for verification
    pub public_key_path: String,

    /// Token lifetime in seconds; `None` issues tokens without an
    /// `exp` claim
    pub token_ttl_secs: Option<u64>,

    /// Runtime configuration
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env (or the DOTENV_PATH override) before reading anything else
        match env::var("DOTENV_PATH") {
            Ok(path) => {
                dotenvy::from_path(&path)
                    .map_err(|e| anyhow::anyhow!("failed to load env file {path}: {e}"))?;
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }

        let config = Self {
            private_key_path: env::var("PRIVATE_KEY_PATH")
                .map_err(|_| anyhow::anyhow!("PRIVATE_KEY_PATH is required"))?,

            public_key_path: env::var("PUBLIC_KEY_PATH")
                .map_err(|_| anyhow::anyhow!("PUBLIC_KEY_PATH is required"))?,

            token_ttl_secs: match env::var("TOKEN_TTL_SECS") {
                Ok(value) => Some(
                    value
                        .parse()
                        .map_err(|_| anyhow::anyhow!("TOKEN_TTL_SECS must be an integer"))?,
                ),
                Err(_) => None,
            },

            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
