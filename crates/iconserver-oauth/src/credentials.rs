//! Consumer credential management.
//!
//! The consumer secret is wrapped in [`SecretString`] so it cannot leak
//! through `Debug`/`Display` output and is zeroed on drop.

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;

/// Environment variable holding the consumer key.
pub const KEY_ENV_VAR: &str = "NOUN_PROJECT_API_KEY";

/// Environment variable holding the consumer secret.
pub const SECRET_ENV_VAR: &str = "NOUN_PROJECT_API_SECRET";

/// OAuth consumer key/secret pair identifying this application to the
/// upstream API.
///
/// Constructed once at startup and shared read-only by every signing
/// operation for the process lifetime.
#[derive(Clone)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: SecretString,
}

impl Credentials {
    /// Creates credentials from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyCredential`] if either value is empty,
    /// so a constructed `Credentials` can always sign.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let consumer_key = consumer_key.into();
        let consumer_secret = consumer_secret.into();

        if consumer_key.is_empty() {
            return Err(AuthError::EmptyCredential("consumer key"));
        }
        if consumer_secret.is_empty() {
            return Err(AuthError::EmptyCredential("consumer secret"));
        }

        Ok(Self {
            consumer_key,
            consumer_secret: SecretString::from(consumer_secret),
        })
    }

    /// Loads credentials from `NOUN_PROJECT_API_KEY` and
    /// `NOUN_PROJECT_API_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingEnvVar`] if either variable is unset,
    /// or [`AuthError::EmptyCredential`] if one is set but blank.
    pub fn from_env() -> Result<Self, AuthError> {
        let key =
            std::env::var(KEY_ENV_VAR).map_err(|_| AuthError::MissingEnvVar(KEY_ENV_VAR))?;
        let secret = std::env::var(SECRET_ENV_VAR)
            .map_err(|_| AuthError::MissingEnvVar(SECRET_ENV_VAR))?;

        Self::new(key, secret)
    }

    /// The consumer key (public, safe to log).
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Exposes the consumer secret for signing.
    ///
    /// Only use the returned value as HMAC key material; never log it.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_pair() {
        let creds = Credentials::new("key", "secret").unwrap();
        assert_eq!(creds.consumer_key(), "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn new_rejects_empty_key() {
        let err = Credentials::new("", "secret").unwrap_err();
        assert!(matches!(err, AuthError::EmptyCredential("consumer key")));
    }

    #[test]
    fn new_rejects_empty_secret() {
        let err = Credentials::new("key", "").unwrap_err();
        assert!(matches!(err, AuthError::EmptyCredential("consumer secret")));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("public-key", "very-secret").unwrap();
        let debug = format!("{creds:?}");

        assert!(debug.contains("public-key"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret"));
    }
}
