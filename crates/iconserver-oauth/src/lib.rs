//! # iconserver-oauth
//!
//! One-legged OAuth 1.0a request signing for server-to-server API calls.
//!
//! "One-legged" means the request is authenticated with consumer
//! credentials only; there is no access token and the token secret half of
//! the signing key is empty. The signer is pure computation: given a URL,
//! an HTTP method, and a [`Credentials`] pair it produces the value of the
//! `Authorization` header, and it is deterministic when the nonce and
//! timestamp are injected via [`OAuthParams`].
//!
//! # Example
//!
//! ```
//! use iconserver_oauth::{Credentials, RequestSigner, SignableRequest};
//! use url::Url;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("consumer-key", "consumer-secret")?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let url = Url::parse("http://api.thenounproject.com/icon/cat")?;
//! let header = signer.authorization_header(&SignableRequest::get(&url));
//! assert!(header.starts_with("OAuth "));
//! # Ok(())
//! # }
//! ```

mod credentials;
mod encode;
mod error;
mod signer;

pub use credentials::{Credentials, KEY_ENV_VAR, SECRET_ENV_VAR};
pub use encode::percent_encode;
pub use error::AuthError;
pub use signer::{OAuthParams, RequestSigner, SignableRequest};
