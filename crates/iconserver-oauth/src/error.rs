//! Error types for credential loading and signing.

use thiserror::Error;

/// Errors that can occur while loading or validating consumer credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// A credential value is present but empty.
    ///
    /// Signing with an empty consumer key or secret would produce
    /// signatures the upstream API rejects; fail at load time instead.
    #[error("credential must not be empty: {0}")]
    EmptyCredential(&'static str),
}
