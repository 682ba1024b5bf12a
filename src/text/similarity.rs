//! Normalized string similarity on a 0–100 scale.
//!
//! Both strings are first reduced to a comparison form (lowercase,
//! non-alphanumerics turned into spaces, trimmed) and then compared with
//! `strsim::normalized_levenshtein`.  The result is scaled by 100 and
//! rounded, so `"Lipitorr"` vs `"Lipitor"` is one edit in eight characters:
//! `round(87.5) = 88`.

use strsim::normalized_levenshtein;

/// Highest possible score (identical comparison forms).
const MAX_SCORE: u8 = 100;

/// Similarity between `a` and `b` in `0..=100`.
///
/// Returns `0` when either side has an empty comparison form, so a
/// punctuation-only string never matches anything.
///
/// ```
/// use prescription_ocr::text::similarity::ratio;
///
/// assert_eq!(ratio("Lipitor", "lipitor"), 100);
/// assert!(ratio("Lipitorr", "Lipitor") >= 85);
/// assert!(ratio("xyzxyz", "Lipitor") < 85);
/// ```
pub fn ratio(a: &str, b: &str) -> u8 {
    let a = comparison_form(a);
    let b = comparison_form(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let score = (normalized_levenshtein(&a, &b) * f64::from(MAX_SCORE)).round();
    score.clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Lowercase, replace every non-alphanumeric with a space, trim.
fn comparison_form(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
