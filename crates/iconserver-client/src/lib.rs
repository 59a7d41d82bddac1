//! # iconserver-client
//!
//! Client for the Noun Project icon-search API, authenticating every call
//! with a one-legged OAuth 1.0a signature from [`iconserver_oauth`].
//!
//! One lookup maps to exactly one upstream GET: no retries, no caching.
//! Failures are classified into [`ClientError`] variants so callers can
//! log what actually went wrong while presenting a uniform error outward.
//!
//! # Example
//!
//! ```no_run
//! use iconserver_client::IconClient;
//! use iconserver_oauth::Credentials;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::from_env()?;
//! let client = IconClient::new(credentials)?;
//!
//! let icon = client.lookup("cat").await?;
//! println!("{}", icon.preview_url);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod responses;

pub use client::{IconClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use responses::IconResult;
