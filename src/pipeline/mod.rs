//! Upload pipeline for prescription scans.
//!
//! Wires the OCR collaborator to the text post-processing steps and shapes
//! the result for a caller.
//!
//! # Architecture
//!
//! ```text
//! Upload ──▶ UploadHandler::process()
//!               ├─ validate (presence, png/jpg)
//!               ├─ OcrEngine::extract_text     (async, external)
//!               ├─ text::normalize              (pure)
//!               └─ text::correct                (pure)
//!                        │
//!                        ▼
//!               ScanResult / UploadError ──▶ ScanResponse (JSON)
//! ```

pub mod handler;
pub mod response;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use handler::{ScanResult, Upload, UploadError, UploadHandler};
pub use response::ScanResponse;
