//! Upload handler: validate → OCR → normalize → correct.
//!
//! [`UploadHandler`] is the layer a web endpoint or CLI calls with an
//! uploaded file.  It owns input validation and OCR failure reporting; the
//! text steps themselves never fail.
//!
//! # Flow
//!
//! ```text
//! Option<Upload>
//!   ├─ None                      → UploadError::MissingImage
//!   ├─ extension not png/jpg     → UploadError::UnsupportedFormat
//!   └─ ocr.extract_text(bytes, mime)
//!         ├─ Err → warn + UploadError::Processing   (no retry)
//!         └─ Ok(raw) → normalize → correct → ScanResult
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::ocr::{ImageFormat, OcrEngine, OcrError};
use crate::text::{correct, normalize, DRUG_VOCABULARY};

// ---------------------------------------------------------------------------
// UploadError
// ---------------------------------------------------------------------------

/// Failures surfaced to whoever submitted the upload.
///
/// Display strings are the user-facing messages.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No file was attached to the request.
    #[error("No image file found")]
    MissingImage,

    /// The file extension is not on the PNG/JPEG whitelist.
    #[error("Unsupported file format. Please upload PNG or JPG.")]
    UnsupportedFormat,

    /// The OCR collaborator failed.
    #[error("Processing failed: {0}")]
    Processing(#[from] OcrError),
}

impl UploadError {
    /// HTTP-style status: 400 for bad input, 500 for processing failures.
    pub fn status_code(&self) -> u16 {
        match self {
            UploadError::MissingImage | UploadError::UnsupportedFormat => 400,
            UploadError::Processing(_) => 500,
        }
    }
}

// ---------------------------------------------------------------------------
// Upload / ScanResult
// ---------------------------------------------------------------------------

/// An uploaded image file.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Client-supplied file name; only its extension is inspected.
    pub filename: String,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}

/// Outcome of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Text exactly as returned by OCR.
    pub recognized_text: String,
    /// Normalized and vocabulary-corrected text.
    pub corrected_text: String,
}

impl ScanResult {
    /// Normalize `raw` and correct it against `vocabulary`.
    ///
    /// ```
    /// use prescription_ocr::pipeline::ScanResult;
    /// use prescription_ocr::text::DRUG_VOCABULARY;
    ///
    /// let result = ScanResult::from_raw("Aspirn 1-2 tabs!!", DRUG_VOCABULARY);
    /// assert_eq!(result.corrected_text, "Aspirin 1-2 tabs");
    /// ```
    pub fn from_raw(raw: &str, vocabulary: &[&str]) -> Self {
        let cleaned = normalize(raw);
        ScanResult {
            recognized_text: raw.to_string(),
            corrected_text: correct(&cleaned, vocabulary),
        }
    }
}

// ---------------------------------------------------------------------------
// UploadHandler
// ---------------------------------------------------------------------------

/// Processes prescription uploads against a fixed vocabulary.
///
/// Cheap to clone; share one instance across request tasks.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use prescription_ocr::config::AppConfig;
/// use prescription_ocr::ocr::DocumentAiEngine;
/// use prescription_ocr::pipeline::{Upload, UploadHandler};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let handler = UploadHandler::new(Arc::new(DocumentAiEngine::from_config(&config.ocr)));
///
/// let upload = Upload { filename: "rx.png".into(), bytes: std::fs::read("rx.png").unwrap() };
/// let result = handler.process(Some(upload)).await.unwrap();
/// println!("{}", result.corrected_text);
/// # }
/// ```
#[derive(Clone)]
pub struct UploadHandler {
    ocr: Arc<dyn OcrEngine>,
    vocabulary: &'static [&'static str],
}

impl UploadHandler {
    /// Handler using the built-in [`DRUG_VOCABULARY`].
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self::with_vocabulary(ocr, DRUG_VOCABULARY)
    }

    /// Handler using a caller-supplied static vocabulary.
    pub fn with_vocabulary(ocr: Arc<dyn OcrEngine>, vocabulary: &'static [&'static str]) -> Self {
        Self { ocr, vocabulary }
    }

    /// Vocabulary tokens are corrected against.
    pub fn vocabulary(&self) -> &'static [&'static str] {
        self.vocabulary
    }

    /// Validate `upload`, run OCR, and post-process the text.
    pub async fn process(&self, upload: Option<Upload>) -> Result<ScanResult, UploadError> {
        let upload = upload.ok_or(UploadError::MissingImage)?;

        let format =
            ImageFormat::from_filename(&upload.filename).ok_or(UploadError::UnsupportedFormat)?;
        log::debug!(
            "pipeline: {} accepted as {} ({} bytes)",
            upload.filename,
            format.mime_type(),
            upload.bytes.len()
        );

        let recognized_text = self
            .ocr
            .extract_text(&upload.bytes, format.mime_type())
            .await
            .map_err(|e| {
                log::warn!("pipeline: OCR failed for {}: {e}", upload.filename);
                UploadError::from(e)
            })?;

        Ok(self.process_text(&recognized_text))
    }

    /// Normalize and correct text that is already available.
    pub fn process_text(&self, raw: &str) -> ScanResult {
        let result = ScanResult::from_raw(raw, self.vocabulary);
        log::info!(
            "pipeline: {} chars recognised → {} chars corrected",
            raw.chars().count(),
            result.corrected_text.chars().count()
        );
        result
    }
}

impl std::fmt::Debug for UploadHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadHandler")
            .field("vocabulary_len", &self.vocabulary.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
