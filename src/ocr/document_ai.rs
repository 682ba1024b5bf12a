//! Google Document AI implementation of [`OcrEngine`].
//!
//! Calls the REST `processors/{id}:process` endpoint with the image inlined
//! as base64.  All connection details come from [`OcrConfig`]; nothing is
//! hardcoded beyond the public regional host pattern.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::config::OcrConfig;
use crate::ocr::engine::{OcrEngine, OcrError};
use crate::ocr::format::ImageFormat;

// ---------------------------------------------------------------------------
// DocumentAiEngine
// ---------------------------------------------------------------------------

/// Sends images to a Document AI OCR processor.
///
/// The `Authorization: Bearer …` header is attached only when an access
/// token is available (see [`OcrConfig::resolved_access_token`]); requests
/// through an authenticating proxy set via `base_url` can omit it.
pub struct DocumentAiEngine {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl DocumentAiEngine {
    /// Build an engine from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is used if the builder fails.
    pub fn from_config(config: &OcrConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: config.process_url(),
            access_token: config.resolved_access_token(),
        }
    }

    /// Full `:process` URL this engine posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for DocumentAiEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAiEngine")
            .field("endpoint", &self.endpoint)
            .field("has_token", &self.access_token.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OcrEngine for DocumentAiEngine {
    async fn extract_text(&self, image: &[u8], mime_type: &str) -> Result<String, OcrError> {
        if ImageFormat::from_mime_type(mime_type).is_none() {
            return Err(OcrError::UnsupportedFormat(mime_type.to_string()));
        }

        let body = build_request(image, mime_type);

        let mut req = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            req = req.bearer_auth(token);
        }

        log::debug!(
            "ocr: POST {} ({} bytes, {})",
            self.endpoint,
            image.len(),
            mime_type
        );
        let response = req.send().await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        parse_response(status, &text)
    }
}

// ---------------------------------------------------------------------------
// Wire format helpers
// ---------------------------------------------------------------------------

/// `ProcessRequest` body with an inline raw document.
fn build_request(image: &[u8], mime_type: &str) -> serde_json::Value {
    serde_json::json!({
        "rawDocument": {
            "content":  BASE64.encode(image),
            "mimeType": mime_type
        }
    })
}

/// Map an HTTP status and body to the extracted text or an [`OcrError`].
fn parse_response(status: u16, body: &str) -> Result<String, OcrError> {
    if !(200..300).contains(&status) {
        return Err(OcrError::Service {
            status,
            message: service_error_message(body),
        });
    }

    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| OcrError::Parse(e.to_string()))?;
    parse_document_text(&json)
}

/// Pull `document.text` out of a `ProcessResponse`, trimmed.
fn parse_document_text(json: &serde_json::Value) -> Result<String, OcrError> {
    let document = json
        .get("document")
        .ok_or_else(|| OcrError::Parse("response has no `document` field".into()))?;

    let text = document["text"].as_str().unwrap_or("").trim();
    if text.is_empty() {
        return Err(OcrError::EmptyDocument);
    }
    Ok(text.to_string())
}

/// Prefer Google's `error.message` over the raw body.
fn service_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_config(base_url: Option<&str>, token: Option<&str>) -> OcrConfig {
        OcrConfig {
            enabled: true,
            project_id: "proj".into(),
            location: "eu".into(),
            processor_id: "abc123".into(),
            base_url: base_url.map(str::to_string),
            access_token: token.map(str::to_string),
            timeout_secs: 5,
        }
    }

    #[test]
    fn endpoint_uses_regional_host_by_default() {
        let engine = DocumentAiEngine::from_config(&make_config(None, Some("t")));
        assert_eq!(
            engine.endpoint(),
            "https://eu-documentai.googleapis.com/v1/projects/proj/locations/eu/processors/abc123:process"
        );
    }

    #[test]
    fn endpoint_honours_base_url_override() {
        let engine =
            DocumentAiEngine::from_config(&make_config(Some("http://localhost:9000/"), Some("t")));
        assert_eq!(
            engine.endpoint(),
            "http://localhost:9000/v1/projects/proj/locations/eu/processors/abc123:process"
        );
    }

    #[test]
    fn request_body_inlines_base64_content() {
        let body = build_request(b"hello", "image/png");
        assert_eq!(body["rawDocument"]["content"], "aGVsbG8=");
        assert_eq!(body["rawDocument"]["mimeType"], "image/png");
    }

    #[test]
    fn parses_and_trims_document_text() {
        let resp = json!({ "document": { "text": "  Lipitor 10mg\n" } });
        assert_eq!(parse_document_text(&resp).unwrap(), "Lipitor 10mg");
    }

    #[test]
    fn blank_document_is_empty_error() {
        let resp = json!({ "document": { "text": "   " } });
        assert!(matches!(parse_document_text(&resp), Err(OcrError::EmptyDocument)));

        let resp = json!({ "document": {} });
        assert!(matches!(parse_document_text(&resp), Err(OcrError::EmptyDocument)));
    }

    #[test]
    fn missing_document_is_parse_error() {
        let resp = json!({ "unexpected": true });
        assert!(matches!(parse_document_text(&resp), Err(OcrError::Parse(_))));
    }

    #[test]
    fn service_error_prefers_google_message() {
        let body = r#"{"error":{"code":404,"message":"Processor not found","status":"NOT_FOUND"}}"#;
        assert_eq!(service_error_message(body), "Processor not found");
        assert_eq!(service_error_message(" upstream down \n"), "upstream down");
    }

    #[test]
    fn success_response_yields_document_text() {
        let body = r#"{"document":{"text":"Lipitorr 1-2 tabs\n"}}"#;
        assert_eq!(parse_response(200, body).unwrap(), "Lipitorr 1-2 tabs");
    }

    #[test]
    fn forbidden_response_is_service_error_with_google_message() {
        let body = r#"{"error":{"code":403,"message":"Permission denied on processor","status":"PERMISSION_DENIED"}}"#;
        match parse_response(403, body) {
            Err(OcrError::Service { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Permission denied on processor");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_success_body_is_parse_error() {
        assert!(matches!(parse_response(200, "<html>oops</html>"), Err(OcrError::Parse(_))));
    }

    #[test]
    fn blank_success_body_text_is_empty_document() {
        let body = r#"{"document":{"text":""}}"#;
        assert!(matches!(parse_response(200, body), Err(OcrError::EmptyDocument)));
    }

    #[tokio::test]
    async fn rejects_unsupported_mime_before_sending() {
        let engine = DocumentAiEngine::from_config(&make_config(Some("http://127.0.0.1:9"), None));
        let err = engine.extract_text(b"GIF89a", "image/gif").await.unwrap_err();
        assert!(matches!(err, OcrError::UnsupportedFormat(ref m) if m == "image/gif"));
    }

    #[test]
    fn engine_is_object_safe() {
        let engine: Box<dyn OcrEngine> =
            Box::new(DocumentAiEngine::from_config(&make_config(None, None)));
        drop(engine);
    }
}
