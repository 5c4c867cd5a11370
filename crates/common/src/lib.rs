//! Shared pieces of the Signet token service: environment-driven
//! configuration and the canonical error envelope every failed request
//! is reported through.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ApiError, ErrorEnvelope};

/// Common result type for API-facing fallible operations
pub type Result<T> = std::result::Result<T, ApiError>;
