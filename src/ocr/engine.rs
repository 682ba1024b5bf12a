//! Core OCR engine trait and error type.
//!
//! [`OcrEngine`] is the seam between the upload pipeline and whatever
//! service turns image bytes into text.  It is object-safe and
//! `Send + Sync` so it can be held behind an `Arc<dyn OcrEngine>`.
//!
//! [`MockOcrEngine`] (available under `#[cfg(test)]`) returns a
//! pre-configured response so the pipeline can be tested without network
//! access.

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// OcrError
// ---------------------------------------------------------------------------

/// Errors that can occur while extracting text from an image.
#[derive(Debug, Clone, Error)]
pub enum OcrError {
    /// HTTP transport or connection error.
    #[error("OCR request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("OCR request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("OCR service returned {status}: {message}")]
    Service { status: u16, message: String },

    /// The response body could not be parsed as expected JSON.
    #[error("failed to parse OCR response: {0}")]
    Parse(String),

    /// The document contained no recognisable text.
    #[error("no text found in document")]
    EmptyDocument,

    /// The MIME type is not one the engine accepts.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The engine is disabled or misconfigured.
    #[error("OCR engine not configured: {0}")]
    Config(String),
}

impl From<reqwest::Error> for OcrError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OcrError::Timeout
        } else {
            OcrError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// OcrEngine trait
// ---------------------------------------------------------------------------

/// Async trait for image-to-text engines.
///
/// # Arguments
/// * `image`     – Raw encoded image bytes (PNG / JPEG).
/// * `mime_type` – MIME type of `image`, e.g. `"image/png"`.
///
/// Callers must treat any `Err` as opaque: no retry, no inspection of the
/// cause beyond displaying it.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn extract_text(&self, image: &[u8], mime_type: &str) -> Result<String, OcrError>;
}

// Compile-time assertion: Box<dyn OcrEngine> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn OcrEngine>) {}
};

// ---------------------------------------------------------------------------
// DisabledOcr
// ---------------------------------------------------------------------------

/// Stand-in engine used when OCR is switched off in the config.  Every call
/// fails with [`OcrError::Config`].
#[derive(Debug, Default)]
pub struct DisabledOcr;

#[async_trait]
impl OcrEngine for DisabledOcr {
    async fn extract_text(&self, _image: &[u8], _mime_type: &str) -> Result<String, OcrError> {
        Err(OcrError::Config("OCR is disabled in settings.toml".into()))
    }
}

// ---------------------------------------------------------------------------
// MockOcrEngine (test only)
// ---------------------------------------------------------------------------

/// Returns a fixed result for every call and remembers the last MIME type.
#[cfg(test)]
pub struct MockOcrEngine {
    response: Result<String, OcrError>,
    last_mime: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MockOcrEngine {
    /// Engine that always returns `text`.
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            last_mime: std::sync::Mutex::new(None),
        }
    }

    /// Engine that always fails with `err`.
    pub fn failing(err: OcrError) -> Self {
        Self {
            response: Err(err),
            last_mime: std::sync::Mutex::new(None),
        }
    }

    /// MIME type passed to the most recent call, if any.
    pub fn last_mime(&self) -> Option<String> {
        self.last_mime.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl OcrEngine for MockOcrEngine {
    async fn extract_text(&self, _image: &[u8], mime_type: &str) -> Result<String, OcrError> {
        *self.last_mime.lock().unwrap() = Some(mime_type.to_string());
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
