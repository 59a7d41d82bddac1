//! OAuth 1.0a signature base-string construction and header assembly.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::{Position, Url};

use crate::credentials::Credentials;
use crate::encode::percent_encode;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// A single outbound request to be signed.
///
/// Transient: constructed per call and consumed immediately by the signer.
#[derive(Debug, Clone, Copy)]
pub struct SignableRequest<'a> {
    /// HTTP method; uppercased when the base string is built.
    pub method: &'a str,
    /// Full request URL. Query parameters, if any, participate in the
    /// signature; the fragment does not.
    pub url: &'a Url,
}

impl<'a> SignableRequest<'a> {
    /// A signable GET request for `url`.
    #[must_use]
    pub fn get(url: &'a Url) -> Self {
        Self { method: "GET", url }
    }
}

/// Per-request nonce and timestamp.
///
/// Production callers let [`RequestSigner::authorization_header`] generate
/// these; tests inject fixed values to make signing deterministic.
#[derive(Debug, Clone)]
pub struct OAuthParams {
    /// Random per-request value preventing replay.
    pub nonce: String,
    /// Unix time at the moment of signing.
    pub timestamp: u64,
}

impl OAuthParams {
    /// Fresh nonce from the thread RNG and the current Unix time.
    #[must_use]
    pub fn generate() -> Self {
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self { nonce, timestamp }
    }
}

/// Produces one-legged OAuth 1.0a `Authorization` header values.
///
/// Pure computation; no network I/O. Deterministic given fixed
/// [`OAuthParams`].
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Creates a signer borrowing the process-wide credentials.
    #[must_use]
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Signs `request` with a fresh nonce and the current timestamp.
    #[must_use]
    pub fn authorization_header(&self, request: &SignableRequest<'_>) -> String {
        self.authorization_header_with(request, &OAuthParams::generate())
    }

    /// Signs `request` with the given nonce and timestamp.
    ///
    /// The algorithm follows RFC 5849 with an empty token secret:
    /// protocol parameters plus the URL's query pairs are percent-encoded,
    /// sorted, and joined into the parameter string; the base string is
    /// `METHOD&enc(base-url)&enc(params)`; the signature is
    /// base64(HMAC-SHA1) keyed by `enc(consumer-secret)&`.
    #[must_use]
    pub fn authorization_header_with(
        &self,
        request: &SignableRequest<'_>,
        params: &OAuthParams,
    ) -> String {
        let signature = self.signature(request, params);

        let mut header_params = self.protocol_params(params);
        header_params.push(("oauth_signature", signature));
        header_params.sort();

        let fields = header_params
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", percent_encode(value)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {fields}")
    }

    fn protocol_params(&self, params: &OAuthParams) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.credentials.consumer_key().to_owned()),
            ("oauth_nonce", params.nonce.clone()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
            ("oauth_timestamp", params.timestamp.to_string()),
            ("oauth_version", OAUTH_VERSION.to_owned()),
        ]
    }

    fn signature(&self, request: &SignableRequest<'_>, params: &OAuthParams) -> String {
        let base_string = self.signature_base_string(request, params);
        let signing_key = format!("{}&", percent_encode(self.credentials.expose_secret()));

        // HMAC accepts keys of any length, so construction cannot fail.
        #[allow(clippy::expect_used)]
        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(base_string.as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }

    fn signature_base_string(
        &self,
        request: &SignableRequest<'_>,
        params: &OAuthParams,
    ) -> String {
        // oauth_signature itself is excluded from the signed set.
        let mut pairs: Vec<(String, String)> = self
            .protocol_params(params)
            .into_iter()
            .map(|(key, value)| {
                (
                    percent_encode(key).into_owned(),
                    percent_encode(&value).into_owned(),
                )
            })
            .collect();

        for (key, value) in request.url.query_pairs() {
            pairs.push((
                percent_encode(&key).into_owned(),
                percent_encode(&value).into_owned(),
            ));
        }

        // Sort by encoded key, then encoded value for duplicate keys.
        pairs.sort();

        let param_string = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        // Scheme, host, and path only; the query string travels via pairs.
        let base_url = &request.url[..Position::AfterPath];

        format!(
            "{}&{}&{}",
            request.method.to_ascii_uppercase(),
            percent_encode(base_url),
            percent_encode(&param_string),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("dpf43f3p2l4k5l03", "kd94hf93k423kf44").unwrap()
    }

    fn fixed_params() -> OAuthParams {
        OAuthParams {
            nonce: "kllo9940pd9333jh".to_owned(),
            timestamp: 1_191_242_096,
        }
    }

    #[test]
    fn base_string_for_plain_path() {
        let creds = credentials();
        let signer = RequestSigner::new(&creds);
        let url = Url::parse("http://api.thenounproject.com/icon/cat").unwrap();

        let base = signer.signature_base_string(&SignableRequest::get(&url), &fixed_params());

        assert_eq!(
            base,
            "GET&http%3A%2F%2Fapi.thenounproject.com%2Ficon%2Fcat&\
             oauth_consumer_key%3Ddpf43f3p2l4k5l03%26\
             oauth_nonce%3Dkllo9940pd9333jh%26\
             oauth_signature_method%3DHMAC-SHA1%26\
             oauth_timestamp%3D1191242096%26\
             oauth_version%3D1.0"
        );
    }

    #[test]
    fn known_signature_for_plain_path() {
        let creds = credentials();
        let signer = RequestSigner::new(&creds);
        let url = Url::parse("http://api.thenounproject.com/icon/cat").unwrap();

        let header =
            signer.authorization_header_with(&SignableRequest::get(&url), &fixed_params());

        // Independently computed HMAC-SHA1 over the base string above.
        assert!(header.contains("oauth_signature=\"DpRBJEz8sR0DvccyR51mE9f1LEg%3D\""));
    }

    #[test]
    fn known_signature_for_encoded_path_segment() {
        let creds = credentials();
        let signer = RequestSigner::new(&creds);
        let url = Url::parse("http://api.thenounproject.com/icon/ice%20cream").unwrap();

        let header =
            signer.authorization_header_with(&SignableRequest::get(&url), &fixed_params());

        assert!(header.contains("oauth_signature=\"58ickevBBbL6gNesV6XsukSONHI%3D\""));
    }

    #[test]
    fn query_pairs_are_signed_sorted_and_reencoded() {
        let creds = Credentials::new("consumer-key", "consumer-secret").unwrap();
        let signer = RequestSigner::new(&creds);
        // Mixed encodings: percent-escaped UTF-8, '+' for space, escaped '&'.
        let url =
            Url::parse("https://example.com/search?q=caf%C3%A9&lang=en+us&b=a%26b").unwrap();
        let params = OAuthParams {
            nonce: "abc123".to_owned(),
            timestamp: 1_700_000_000,
        };

        let base = signer.signature_base_string(&SignableRequest::get(&url), &params);
        assert_eq!(
            base,
            "GET&https%3A%2F%2Fexample.com%2Fsearch&\
             b%3Da%2526b%26\
             lang%3Den%2520us%26\
             oauth_consumer_key%3Dconsumer-key%26\
             oauth_nonce%3Dabc123%26\
             oauth_signature_method%3DHMAC-SHA1%26\
             oauth_timestamp%3D1700000000%26\
             oauth_version%3D1.0%26\
             q%3Dcaf%25C3%25A9"
        );

        let header = signer.authorization_header_with(&SignableRequest::get(&url), &params);
        assert!(header.contains("oauth_signature=\"DauwPk3QF5ivamSQiGz5rAL8dWk%3D\""));
    }

    #[test]
    fn signing_is_deterministic_given_fixed_params() {
        let creds = credentials();
        let signer = RequestSigner::new(&creds);
        let url = Url::parse("http://api.thenounproject.com/icon/cat").unwrap();
        let request = SignableRequest::get(&url);

        let first = signer.authorization_header_with(&request, &fixed_params());
        let second = signer.authorization_header_with(&request, &fixed_params());
        assert_eq!(first, second);
    }

    #[test]
    fn header_lists_all_protocol_params() {
        let creds = credentials();
        let signer = RequestSigner::new(&creds);
        let url = Url::parse("http://api.thenounproject.com/icon/cat").unwrap();

        let header = signer.authorization_header(&SignableRequest::get(&url));

        assert!(header.starts_with("OAuth "));
        for key in [
            "oauth_consumer_key=\"",
            "oauth_nonce=\"",
            "oauth_signature=\"",
            "oauth_signature_method=\"HMAC-SHA1\"",
            "oauth_timestamp=\"",
            "oauth_version=\"1.0\"",
        ] {
            assert!(header.contains(key), "missing {key} in {header}");
        }
    }

    #[test]
    fn generated_nonces_differ() {
        let first = OAuthParams::generate();
        let second = OAuthParams::generate();

        assert_eq!(first.nonce.len(), NONCE_LEN);
        assert!(first.nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first.nonce, second.nonce);
    }
}
