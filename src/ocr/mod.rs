//! OCR collaborator: image bytes in, raw text out.
//!
//! # Architecture
//!
//! ```text
//! Upload (filename, bytes)
//!        │
//!        ▼
//! ImageFormat::from_filename ──▶ mime type
//!        │
//!        ▼
//! ┌─────────────────────────────┐
//! │    OcrEngine (trait)        │
//! │  ├─ DocumentAiEngine (HTTP) │
//! │  └─ DisabledOcr             │
//! └─────────────────────────────┘
//!        │
//!        ▼
//!   raw OCR text ──▶ text::normalize ──▶ text::correct
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use prescription_ocr::config::AppConfig;
//! use prescription_ocr::ocr::{DocumentAiEngine, ImageFormat, OcrEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let engine = DocumentAiEngine::from_config(&config.ocr);
//!
//!     let bytes = std::fs::read("rx.png").unwrap();
//!     let mime = ImageFormat::Png.mime_type();
//!     let text = engine.extract_text(&bytes, mime).await.unwrap();
//!     println!("{text}");
//! }
//! ```

pub mod document_ai;
pub mod engine;
pub mod format;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use document_ai::DocumentAiEngine;
pub use engine::{DisabledOcr, OcrEngine, OcrError};
pub use format::ImageFormat;

// test-only re-export so the pipeline tests can import MockOcrEngine directly.
#[cfg(test)]
pub use engine::MockOcrEngine;
