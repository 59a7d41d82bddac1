//! Serde mirror of the upstream payload.
//!
//! Only `icon.preview_url` is surfaced; every other upstream field is
//! ignored and discarded.

use serde::Deserialize;

/// The single value extracted from a successful upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResult {
    /// URL of the suggested icon's preview image.
    pub preview_url: String,
}

/// Top-level upstream response shape: `{ "icon": { ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct IconEnvelope {
    pub(crate) icon: IconPreview,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IconPreview {
    pub(crate) preview_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_preview_url_and_ignores_extra_fields() {
        let body = r#"{
            "icon": {
                "id": "42",
                "preview_url": "https://example.com/a.png",
                "term": "cat"
            },
            "generated_at": "now"
        }"#;

        let envelope: IconEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.icon.preview_url, "https://example.com/a.png");
    }

    #[test]
    fn missing_preview_url_is_an_error() {
        let body = r#"{"icon": {"id": "42"}}"#;
        assert!(serde_json::from_str::<IconEnvelope>(body).is_err());
    }
}
