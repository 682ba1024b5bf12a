//! Built-in prescription vocabulary.
//!
//! Drug names and standard instruction phrases that OCR output is corrected
//! against.  The list is process-wide, read-only, and ordered: when two
//! entries score equally the earlier one wins, so order matters.

// ---------------------------------------------------------------------------
// Static vocabulary
// ---------------------------------------------------------------------------

/// Recognised drug names and medical instructions, in match-priority order.
pub static DRUG_VOCABULARY: &[&str] = &[
    "Lipitor",
    "Ibuprofen",
    "Aspirin",
    "Amoxicillin",
    "Metformin",
    "Losartan",
    "Omeprazole",
    "Atorvastatin",
    "Simvastatin",
    "Hydrochlorothiazide",
    "Allergy",
    "Paracetamol",
    "AstraZeneca",
    "Cancer",
    "1 tab a day",
    "Take 1 tablet daily",
    "Twice a day",
    "Every 8 hours",
    "Before meals",
    "After meals",
    "With water",
];

/// Case-sensitive exact membership test.
pub fn contains<V: AsRef<str>>(vocabulary: &[V], token: &str) -> bool {
    vocabulary.iter().any(|term| term.as_ref() == token)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_case_sensitive() {
        assert!(contains(DRUG_VOCABULARY, "Lipitor"));
        assert!(!contains(DRUG_VOCABULARY, "lipitor"));
    }

    #[test]
    fn contains_matches_multi_word_phrases_whole() {
        assert!(contains(DRUG_VOCABULARY, "Twice a day"));
        assert!(!contains(DRUG_VOCABULARY, "Twice"));
    }

    #[test]
    fn vocabulary_has_no_empty_entries() {
        assert!(DRUG_VOCABULARY.iter().all(|t| !t.trim().is_empty()));
    }
}
