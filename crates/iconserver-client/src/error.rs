//! Error taxonomy for icon lookups.
//!
//! The HTTP layer collapses every variant into one generic 500 response;
//! the distinctions here exist for logging and tests.

use thiserror::Error;

/// Errors that can occur during an icon lookup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The search term was rejected before any upstream call.
    #[error("invalid search term: {0}")]
    InvalidSearchTerm(String),

    /// The upstream base URL could not accept a path segment.
    #[error("invalid upstream base URL")]
    InvalidBaseUrl,

    /// Failed to construct the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport-level failure reaching the upstream API: DNS, refused
    /// connection, or timeout.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// The upstream body was not JSON of the expected shape.
    #[error("unexpected upstream response: {0}")]
    InvalidResponse(String),
}
