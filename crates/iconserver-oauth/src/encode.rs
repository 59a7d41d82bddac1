//! RFC 3986 percent-encoding as required by OAuth 1.0a.
//!
//! OAuth mandates a stricter encode set than the one browsers use for
//! query strings: every byte outside the unreserved set
//! (`A-Z a-z 0-9 - . _ ~`) is encoded, including `+`, `*`, and space.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a string per the OAuth 1.0a parameter encoding rules.
#[must_use]
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).into()
}
