//! Vocabulary-based token correction.
//!
//! Each whitespace-separated token is classified into a [`MatchOutcome`]:
//!
//! ```text
//! token ──exact member?──▶ Exact
//!       ──all alphabetic?─▶ FuzzyCandidate { best entry, score }
//!       ──otherwise──────▶ PassThrough
//! ```
//!
//! Only a `FuzzyCandidate` whose score reaches [`MATCH_THRESHOLD`] replaces
//! the token; everything else is emitted as-is.  Tokens carrying digits,
//! hyphens or slashes (`1-2`, `dai1y`, `3/day`) are never fuzzy-matched.

use crate::text::similarity::ratio;
use crate::text::vocabulary;

/// Minimum similarity score (0–100) for a fuzzy substitution.
pub const MATCH_THRESHOLD: u8 = 85;

// ---------------------------------------------------------------------------
// MatchOutcome
// ---------------------------------------------------------------------------

/// How a single token relates to the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'v> {
    /// The token is itself a vocabulary entry.
    Exact,
    /// Alphabetic token; `candidate` is the best-scoring entry (first one
    /// wins on ties).
    FuzzyCandidate { candidate: &'v str, score: u8 },
    /// Not eligible for fuzzy matching (non-alphabetic, or an empty
    /// vocabulary).
    PassThrough,
}

impl<'v> MatchOutcome<'v> {
    /// Classify `token` against `vocabulary`.
    ///
    /// ```
    /// use prescription_ocr::text::{MatchOutcome, DRUG_VOCABULARY};
    ///
    /// assert_eq!(MatchOutcome::classify("Aspirin", DRUG_VOCABULARY), MatchOutcome::Exact);
    /// assert_eq!(MatchOutcome::classify("1-2", DRUG_VOCABULARY), MatchOutcome::PassThrough);
    /// assert!(matches!(
    ///     MatchOutcome::classify("Lipitorr", DRUG_VOCABULARY),
    ///     MatchOutcome::FuzzyCandidate { candidate: "Lipitor", .. }
    /// ));
    /// ```
    pub fn classify<V: AsRef<str>>(token: &str, vocabulary: &'v [V]) -> Self {
        if vocabulary::contains(vocabulary, token) {
            return MatchOutcome::Exact;
        }
        if !is_alphabetic(token) {
            return MatchOutcome::PassThrough;
        }
        best_match(token, vocabulary)
            .map(|(candidate, score)| MatchOutcome::FuzzyCandidate { candidate, score })
            .unwrap_or(MatchOutcome::PassThrough)
    }

    /// `true` when this outcome replaces the token with a vocabulary entry.
    pub fn is_substitution(&self) -> bool {
        matches!(self, MatchOutcome::FuzzyCandidate { score, .. } if *score >= MATCH_THRESHOLD)
    }

    /// The text to emit for `token` under this outcome.
    pub fn resolve<'a>(&self, token: &'a str) -> &'a str
    where
        'v: 'a,
    {
        match *self {
            MatchOutcome::FuzzyCandidate { candidate, score } if score >= MATCH_THRESHOLD => {
                candidate
            }
            _ => token,
        }
    }
}

// ---------------------------------------------------------------------------
// TokenCorrection
// ---------------------------------------------------------------------------

/// One token of a correction pass, with the decision that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCorrection<'t, 'v> {
    /// Token as it appeared in the input.
    pub original: &'t str,
    /// Classification against the vocabulary.
    pub outcome: MatchOutcome<'v>,
}

impl<'t, 'v> TokenCorrection<'t, 'v> {
    /// The emitted text for this token.
    pub fn emitted(&self) -> &str {
        self.outcome.resolve(self.original)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify every token of `text` without joining the result.
///
/// Useful for auditing which tokens were changed and why.
pub fn correct_tokens<'t, 'v, V: AsRef<str>>(
    text: &'t str,
    vocabulary: &'v [V],
) -> Vec<TokenCorrection<'t, 'v>> {
    text.split_whitespace()
        .map(|token| TokenCorrection {
            original: token,
            outcome: MatchOutcome::classify(token, vocabulary),
        })
        .collect()
}

/// Correct misrecognised drug names and instructions in `text`.
///
/// Tokens are separated on whitespace and re-joined with single spaces.
///
/// ```
/// use prescription_ocr::text::{correct, DRUG_VOCABULARY};
///
/// assert_eq!(
///     correct("Lipitorr Tak3 1-2 tabs dai1y", DRUG_VOCABULARY),
///     "Lipitor Tak3 1-2 tabs dai1y"
/// );
/// ```
pub fn correct<V: AsRef<str>>(text: &str, vocabulary: &[V]) -> String {
    correct_tokens(text, vocabulary)
        .iter()
        .map(|tc| {
            if tc.outcome.is_substitution() {
                log::debug!("corrector: {:?} → {:?} ({:?})", tc.original, tc.emitted(), tc.outcome);
            }
            tc.emitted()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Non-empty and every character alphabetic.
fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Highest-scoring entry; ties keep the earliest entry.
fn best_match<'v, V: AsRef<str>>(token: &str, vocabulary: &'v [V]) -> Option<(&'v str, u8)> {
    let mut best: Option<(&'v str, u8)> = None;
    for term in vocabulary {
        let term = term.as_ref();
        let score = ratio(token, term);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((term, score)),
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
