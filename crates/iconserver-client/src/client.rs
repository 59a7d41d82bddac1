//! Icon lookup against the upstream search API.

use std::time::Duration;

use reqwest::header;
use tracing::debug;
use url::Url;

use iconserver_oauth::{Credentials, RequestSigner, SignableRequest};

use crate::error::ClientError;
use crate::responses::{IconEnvelope, IconResult};

/// Production endpoint of the Noun Project icon-search API.
pub const DEFAULT_BASE_URL: &str = "http://api.thenounproject.com/icon";

/// Bound on the upstream call so a hung connection cannot pin a request
/// task forever. Expiry is reported as [`ClientError::UpstreamUnavailable`].
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for icon lookups.
///
/// Holds the immutable consumer credentials and a pooled HTTP client;
/// cheap to share behind an `Arc` across request tasks.
pub struct IconClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl std::fmt::Debug for IconClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl IconClient {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(ClientError::ClientBuild)?;

        let base_url =
            Url::parse(DEFAULT_BASE_URL).map_err(|_| ClientError::InvalidBaseUrl)?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Points the client at a different base URL (tests, staging).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not
    /// parse or cannot carry path segments.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl)?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl);
        }
        self.base_url = parsed;
        Ok(self)
    }

    /// Looks up the suggested icon for `search_term`.
    ///
    /// Issues exactly one signed upstream GET and extracts
    /// `icon.preview_url` from the JSON response.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidSearchTerm`] for empty terms, `.`/`..`, or
    ///   terms containing control characters.
    /// - [`ClientError::UpstreamUnavailable`] for transport failures
    ///   (DNS, refused connection, timeout).
    /// - [`ClientError::UpstreamStatus`] for non-success upstream status.
    /// - [`ClientError::InvalidResponse`] when the body is not JSON of
    ///   the expected shape.
    pub async fn lookup(&self, search_term: &str) -> Result<IconResult, ClientError> {
        validate_term(search_term)?;

        let url = self.icon_url(search_term)?;
        let signer = RequestSigner::new(&self.credentials);
        let authorization = signer.authorization_header(&SignableRequest::get(&url));

        debug!(url = %url, "querying upstream icon API");

        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ClientError::UpstreamUnavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UpstreamStatus(status));
        }

        let envelope: IconEnvelope = response
            .json()
            .await
            .map_err(|err| ClientError::InvalidResponse(err.to_string()))?;

        Ok(IconResult {
            preview_url: envelope.icon.preview_url,
        })
    }

    /// Upstream URL with the term as a percent-encoded final path segment.
    /// All auth material travels in the header; the query stays empty.
    fn icon_url(&self, search_term: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl)?
            .pop_if_empty()
            .push(search_term);
        Ok(url)
    }
}

/// Rejects terms that cannot safely become a path segment.
fn validate_term(search_term: &str) -> Result<(), ClientError> {
    if search_term.trim().is_empty() {
        return Err(ClientError::InvalidSearchTerm(
            "search term is empty".to_owned(),
        ));
    }
    if search_term == "." || search_term == ".." {
        return Err(ClientError::InvalidSearchTerm(format!(
            "search term {search_term:?} is a relative path component"
        )));
    }
    if search_term.chars().any(char::is_control) {
        return Err(ClientError::InvalidSearchTerm(
            "search term contains control characters".to_owned(),
        ));
    }
    Ok(())
}
