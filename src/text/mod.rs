//! Text post-processing for OCR'd prescriptions.
//!
//! This module provides:
//! * [`normalize`]: strip OCR noise, keep dosage separators, collapse spaces.
//! * [`correct`]: snap near-miss tokens onto the drug vocabulary.
//! * [`MatchOutcome`]: per-token classification behind [`correct`].
//! * [`DRUG_VOCABULARY`]: the built-in drug / instruction list.
//! * [`similarity::ratio`]: 0–100 similarity score used for matching.
//!
//! Both [`normalize`] and [`correct`] are pure and total; they can be called
//! from any number of threads at once.
//!
//! # Quick start
//!
//! ```rust
//! use prescription_ocr::text::{correct, normalize, DRUG_VOCABULARY};
//!
//! let raw = "Lipitorr Tak3 1-2 tabs dai1y!!";
//! let cleaned = normalize(raw);
//! assert_eq!(correct(&cleaned, DRUG_VOCABULARY), "Lipitor Tak3 1-2 tabs dai1y");
//! ```

pub mod corrector;
pub mod normalize;
pub mod similarity;
pub mod vocabulary;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrector::{correct, correct_tokens, MatchOutcome, TokenCorrection, MATCH_THRESHOLD};
pub use normalize::normalize;
pub use vocabulary::DRUG_VOCABULARY;
