//! Icon Server daemon library.
//!
//! HTTP surface for the icon proxy: three routes, CORS headers on every
//! response, and a uniform generic 500 for all per-request failures.
//! Exposed as a library so integration tests can assemble the router
//! against a stubbed upstream.

pub mod api_docs;
pub mod config;
pub mod error;
pub mod server;
