//! Prescription OCR post-processing.
//!
//! An uploaded prescription image is sent to an OCR service, the returned
//! text is cleaned with [`text::normalize`], and misrecognised drug names are
//! snapped onto a fixed vocabulary with [`text::correct`].
//!
//! * [`text`]: pure normalization and fuzzy vocabulary correction.
//! * [`ocr`]: the OCR collaborator trait and its Document AI client.
//! * [`pipeline`]: upload validation, orchestration and response shaping.
//! * [`config`]: TOML settings and platform paths.

pub mod config;
pub mod ocr;
pub mod pipeline;
pub mod text;
