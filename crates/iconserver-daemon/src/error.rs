//! Error types for the daemon.

use thiserror::Error;

/// Errors that can occur while starting or running the daemon.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error: missing or empty credentials.
    ///
    /// Fatal; raised before the listener binds so the process never
    /// accepts requests it cannot sign.
    #[error("configuration error: {0}")]
    Config(#[from] iconserver_oauth::AuthError),

    /// Failed to construct the upstream client.
    #[error("client error: {0}")]
    Client(#[from] iconserver_client::ClientError),

    /// I/O error binding or serving the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`DaemonError`].
pub type Result<T> = std::result::Result<T, DaemonError>;
