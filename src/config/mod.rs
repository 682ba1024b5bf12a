//! Configuration module for prescription OCR.
//!
//! Provides `AppConfig` (top-level settings), `OcrConfig` for the Document AI
//! processor, `AppPaths` for cross-platform directories, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, OcrConfig, ACCESS_TOKEN_ENV};
