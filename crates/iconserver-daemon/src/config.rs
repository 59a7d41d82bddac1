//! Daemon configuration.
//!
//! Two secrets, loaded once from the process environment at startup:
//! `NOUN_PROJECT_API_KEY` and `NOUN_PROJECT_API_SECRET`. A local `.env`
//! file is honored when present. The listening port is fixed.

use iconserver_oauth::Credentials;

use crate::error::Result;

/// Fixed listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Immutable daemon configuration, constructed once at startup and passed
/// explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Consumer credentials for upstream signing.
    pub credentials: Credentials,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DaemonError::Config`] if either credential
    /// variable is unset or empty. Callers must treat this as fatal and
    /// exit before binding the listener.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; real environment variables win.
        dotenvy::dotenv().ok();

        let credentials = Credentials::from_env()?;

        Ok(Self {
            credentials,
            port: DEFAULT_PORT,
        })
    }
}
