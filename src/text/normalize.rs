//! OCR text cleanup.
//!
//! Raw OCR output is full of stray punctuation, bullet glyphs, and ragged
//! whitespace.  [`normalize`] keeps only what can carry prescription meaning:
//! ASCII letters and digits, whitespace, and the two separators used in
//! dosage notation (`1-2`, `3/day`).  Non-ASCII glyphs (`µ`, `é`, `²`) are
//! dropped like any other OCR noise.

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Strip non-alphanumeric noise and collapse whitespace.
///
/// # Rules
///
/// | # | Rule | Example |
/// |---|------|---------|
/// | 1 | Drop everything except ASCII letters/digits, whitespace, `-`, `/` | `"tabs!!"` → `"tabs"` |
/// | 2 | Collapse each whitespace run to one space | `"a \t\n b"` → `"a b"` |
/// | 3 | Trim both ends | `"  x  "` → `"x"` |
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use prescription_ocr::text::normalize;
///
/// assert_eq!(normalize("Take 1-2 tabs!!  daily"), "Take 1-2 tabs daily");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| is_kept(c)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `true` for characters that survive [`normalize`].
fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '/'
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn whitespace_only_gives_empty_output() {
        assert_eq!(normalize(" \t\n  "), "");
    }

    #[test]
    fn strips_punctuation_and_collapses_spaces() {
        assert_eq!(normalize("Take 1-2 tabs!!  daily"), "Take 1-2 tabs daily");
    }

    #[test]
    fn keeps_hyphens_and_slashes() {
        assert_eq!(normalize("3/day, 1-2 (tabs)"), "3/day 1-2 tabs");
    }

    #[test]
    fn punctuation_only_token_disappears() {
        // "!!!" vanishes entirely, so its neighbours end up one space apart.
        assert_eq!(normalize("Aspirin !!! daily"), "Aspirin daily");
    }

    #[test]
    fn mixed_whitespace_collapses_to_single_space() {
        assert_eq!(normalize("  Before\tmeals\r\n\nWith   water "), "Before meals With water");
    }

    #[test]
    fn clean_input_only_has_whitespace_collapsed() {
        let input = "Lipitor 10 mg  1/day   1-2";
        assert_eq!(normalize(input), "Lipitor 10 mg 1/day 1-2");
    }

    #[test]
    fn non_ascii_letters_and_digits_are_dropped() {
        assert_eq!(normalize("5µg café x²"), "5g caf x");
    }

    #[test]
    fn non_ascii_only_token_disappears() {
        assert_eq!(normalize("Aspirin µµ daily"), "Aspirin daily");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "",
            "Lipitorr Tak3 1-2 tabs dai1y!!",
            "  **Rx**  Amoxicillin 500mg\t3x/day ",
            "---///",
            // non-ASCII letters and dashes are dropped on the first pass
            "é ü ñ — “quoted”",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn end_to_end_sample_matches_expected_cleanup() {
        assert_eq!(
            normalize("Lipitorr Tak3 1-2 tabs dai1y!!"),
            "Lipitorr Tak3 1-2 tabs dai1y"
        );
    }
}
